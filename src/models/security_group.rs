//! EC2 security group and region records.
//!
//! Field names follow the JSON emitted by `aws ec2 describe-security-groups`
//! and `aws ec2 describe-regions`.

use serde::Deserialize;

/// Response of `ec2 describe-security-groups`.
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeSecurityGroups {
    #[serde(default)]
    pub security_groups: Vec<SecurityGroup>,
}

/// A single security group with its inbound permissions.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "PascalCase")]
pub struct SecurityGroup {
    pub group_id: String,
    #[serde(default)]
    pub group_name: String,
    pub description: Option<String>,
    pub vpc_id: Option<String>,
    pub owner_id: Option<String>,
    /// Ingress permissions.
    #[serde(default)]
    pub ip_permissions: Vec<IpPermission>,
}

/// One ingress permission; a protocol/port pair and the ranges it allows.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "PascalCase")]
pub struct IpPermission {
    pub ip_protocol: Option<String>,
    pub from_port: Option<i64>,
    pub to_port: Option<i64>,
    #[serde(default)]
    pub ip_ranges: Vec<IpRange>,
}

/// An IPv4 source range with the free-text label set on the rule.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "PascalCase")]
pub struct IpRange {
    pub cidr_ip: String,
    pub description: Option<String>,
}

impl SecurityGroup {
    /// Every IPv4 source range across all ingress permissions.
    pub fn ingress_ranges(&self) -> impl Iterator<Item = &IpRange> {
        self.ip_permissions
            .iter()
            .flat_map(|permission| permission.ip_ranges.iter())
    }
}

/// Response of `ec2 describe-regions`.
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeRegions {
    #[serde(default)]
    pub regions: Vec<Region>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "PascalCase")]
pub struct Region {
    pub region_name: String,
    pub opt_in_status: Option<String>,
}

impl Region {
    /// Regions that were never enabled hold no resources.
    pub fn is_enabled(&self) -> bool {
        self.opt_in_status.as_deref() != Some("not-opted-in")
    }
}

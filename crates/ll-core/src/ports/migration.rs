/// One step in the stored-profile migration chain.
///
/// Works on the raw stored value so that layouts which no longer match
/// [`ProfileRecord`](crate::profile::ProfileRecord) can still be read.
pub trait ProfileMigrationPort: Send + Sync {
    fn from_version(&self) -> u32;
    fn to_version(&self) -> u32;
    fn migrate(&self, raw: serde_json::Value) -> serde_json::Value;
}

pub const DAY_IN_LEDGERS: u32 = 17280;

// Instance TTL. The dispatcher keeps its whole slot table in instance storage,
// so every read or write extends it.
pub const MAX_INSTANCE_TTL: u32 = DAY_IN_LEDGERS * 30;
pub const INSTANCE_TTL_THRESHOLD: u32 = MAX_INSTANCE_TTL - DAY_IN_LEDGERS;

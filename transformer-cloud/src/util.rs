//! Shared helpers

/// Random maintenance number candidate, `M-` followed by six digits
pub fn generate_maintenance_number() -> String {
    use rand::Rng;
    let n: u32 = rand::thread_rng().gen_range(0..1_000_000);
    format!("M-{n:06}")
}

/// Canonical names treated as red meat when balancing lunch and dinner.
pub const RED_MEAT: &[&str] = &["牛肉", "猪肉", "排骨", "羊肉", "猪肝"];

pub fn is_red_meat(canonical: &str) -> bool {
    RED_MEAT.contains(&canonical)
}

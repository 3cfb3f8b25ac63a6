/// Turns a photo of the fridge into raw ingredient names.
pub trait PantryScanner {
    fn scan(&self, image: &[u8]) -> dailykitchen_shared::Result<Vec<String>>;
}

/// Stand-in recognizer that always "sees" the same three items.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockScanner;

pub const MOCK_SCAN_RESULT: &[&str] = &["西红柿", "基围虾", "娃娃菜"];

impl PantryScanner for MockScanner {
    fn scan(&self, image: &[u8]) -> dailykitchen_shared::Result<Vec<String>> {
        tracing::debug!(bytes = image.len(), "mock pantry scan");

        Ok(MOCK_SCAN_RESULT.iter().map(|s| s.to_string()).collect())
    }
}

/// How an element participates in rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Display {
    /// Whatever the element's stylesheet says (an empty inline `display`).
    #[default]
    Default,
    /// `display: none`. The element stays in the tree.
    None,
}

impl Display {
    pub fn is_hidden(self) -> bool {
        matches!(self, Display::None)
    }
}

use super::placeholder::Block;

/// Per-call bookkeeping of the format engine.
///
/// Open blocks are counted per kind, not stacked: any `{?}` closes any open
/// `{?N}`, whichever argument opened it.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RenderState {
    auto_index: usize,
    open_ifs: u32,
    open_not_ifs: u32,
    open_colors: u32,
}

impl RenderState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the position the next `{}` draws from and advances it.
    pub fn next_auto_index(&mut self) -> usize {
        let index = self.auto_index;
        self.auto_index += 1;
        index
    }

    pub fn open(&mut self, block: Block) {
        *self.counter(block) += 1;
    }

    /// Closes one block of the given kind. Returns false, leaving the state
    /// untouched, when none is open.
    pub fn close(&mut self, block: Block) -> bool {
        let counter = self.counter(block);
        if *counter == 0 {
            return false;
        }
        *counter -= 1;
        true
    }

    /// Number of currently open blocks of the given kind.
    pub fn open_count(&self, block: Block) -> u32 {
        match block {
            Block::If => self.open_ifs,
            Block::NotIf => self.open_not_ifs,
            Block::Color => self.open_colors,
        }
    }

    fn counter(&mut self, block: Block) -> &mut u32 {
        match block {
            Block::If => &mut self.open_ifs,
            Block::NotIf => &mut self.open_not_ifs,
            Block::Color => &mut self.open_colors,
        }
    }
}

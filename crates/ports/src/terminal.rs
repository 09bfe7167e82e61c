// crates/ports/src/terminal.rs
use filecmdr_shared_kernel::Result;

/// Port reading interactive responses.
pub trait UserInput {
    /// First character of the next response; the rest of the buffered input
    /// is discarded. `None` at end of input.
    fn read_answer(&mut self) -> Result<Option<char>>;

    /// Next line without its terminator. `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>>;
}

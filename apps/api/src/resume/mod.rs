// Resume authenticity checks over uploaded PDFs or pasted text.

pub mod extract;
pub mod handlers;
pub mod scorer;

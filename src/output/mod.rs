//! Output encoders (PBM, PNG, terminal).

mod pbm;
mod png_encoder;
mod terminal;

pub use pbm::PbmEncoder;
pub use png_encoder::PngEncoder;
pub use terminal::TerminalEncoder;

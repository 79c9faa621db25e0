mod check;

pub use check::CheckResponse;

/// Process exit codes.
pub mod exit {
    pub const SUCCESS: i32 = 0;
    pub const OPERATIONAL_FAILURE: i32 = 1;
    /// No tokens at all; usage was printed.
    pub const MISSING_ACTION: i32 = 1;
}

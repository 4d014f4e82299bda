//! Formatting parameters for the text writer and the debug printer

/// Decimal places used by the text writer (`%lf`)
pub const DEFAULT_WRITE_PRECISION: usize = 6;

/// Mantissa digits used by the debug printer (`%2.5e`)
pub const DEFAULT_PRINT_PRECISION: usize = 5;

/// Output formatting configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatConfig {
    /// Digits after the decimal point for values in saved files
    pub write_precision: usize,
    /// Digits after the decimal point of the scientific mantissa when printing
    pub print_precision: usize,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            write_precision: DEFAULT_WRITE_PRECISION,
            print_precision: DEFAULT_PRINT_PRECISION,
        }
    }
}

impl FormatConfig {
    /// Sets the writer precision
    pub fn with_write_precision(mut self, precision: usize) -> Self {
        self.write_precision = precision;
        self
    }

    /// Sets the printer precision
    pub fn with_print_precision(mut self, precision: usize) -> Self {
        self.print_precision = precision;
        self
    }
}

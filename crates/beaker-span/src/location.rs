use std::fmt;

/// A line/column position in a source file.
///
/// Lines and columns both start at 1. A column of 0 means the column is
/// unknown, and a line of 0 means there is no location at all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SourceLocation {
    pub line: u32,
    pub column: u32,
}

impl SourceLocation {
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    pub const fn is_valid(self) -> bool {
        self.line != 0
    }

    /// The location `columns` characters to the right on the same line.
    pub const fn advance(self, columns: u32) -> Self {
        Self { line: self.line, column: self.column + columns }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.line)?;
        if self.column != 0 {
            write!(f, ":{}", self.column)?;
        }
        Ok(())
    }
}

/// A half-open span of source text between two locations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SourceRange {
    pub start: SourceLocation,
    pub end: SourceLocation,
}

impl SourceRange {
    pub const INVALID: Self = Self { start: SourceLocation::new(0, 0), end: SourceLocation::new(0, 0) };

    pub const fn new(start: SourceLocation, end: SourceLocation) -> Self {
        Self { start, end }
    }

    /// A range covering a single point.
    pub const fn at(location: SourceLocation) -> Self {
        Self { start: location, end: location }
    }

    pub const fn is_invalid(self) -> bool {
        !self.start.is_valid()
    }

    pub const fn is_valid(self) -> bool {
        self.start.is_valid()
    }

    /// True if the range denotes a single point.
    pub fn is_location(self) -> bool {
        self.is_valid() && self.start == self.end
    }

    /// True if the range starts and ends on the same line.
    pub fn is_single_line(self) -> bool {
        self.is_valid() && self.start.line == self.end.line
    }

    /// The smallest range containing both `self` and `other`. Invalid ranges
    /// contribute nothing.
    pub fn cover(self, other: Self) -> Self {
        if self.is_invalid() {
            return other;
        }
        if other.is_invalid() {
            return self;
        }
        Self { start: self.start.min(other.start), end: self.end.max(other.end) }
    }
}

impl fmt::Display for SourceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_invalid() {
            return f.write_str("<invalid>");
        }

        if self.is_single_line() {
            write!(f, "{}:{}", self.start.line, self.start.column)?;
            if !self.is_location() {
                write!(f, "-{}", self.end.column)?;
            }
            Ok(())
        } else {
            write!(f, "{}..{}", self.start, self.end)
        }
    }
}

//! Indentation configuration for code generation.

/// Indentation style for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Spaces with the specified width (e.g., 2 or 4).
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// 4-space indentation (Rust).
    pub const RUST: Self = Self::Spaces(4);

    /// 2-space indentation (TypeScript).
    pub const TYPESCRIPT: Self = Self::Spaces(2);

    /// Write one indent level into `buf`.
    pub fn write_to(&self, buf: &mut String) {
        match self {
            Self::Spaces(width) => buf.extend(std::iter::repeat_n(' ', usize::from(*width))),
            Self::Tab => buf.push('\t'),
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::RUST
    }
}

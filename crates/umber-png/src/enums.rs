/// Scanline filter types from the png specification
///
/// Every scanline this encoder emits is prefixed with
/// [`None`](FilterType::None), the other filters exist as
/// documentation of the wire values
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum FilterType {
    None,
    Sub,
    Up,
    Average,
    Paeth
}

impl FilterType {
    /// The filter type byte prefixed to a scanline
    pub const fn to_int(self) -> u8 {
        match self {
            Self::None => 0,
            Self::Sub => 1,
            Self::Up => 2,
            Self::Average => 3,
            Self::Paeth => 4
        }
    }
}

//! 筋（File）

/// 筋（a筋〜h筋）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum File {
    FileA = 0,
    FileB = 1,
    FileC = 2,
    FileD = 3,
    FileE = 4,
    FileF = 5,
    FileG = 6,
    FileH = 7,
}

impl File {
    /// 筋の数
    pub const NUM: usize = 8;

    /// 全ての筋（a〜h）
    pub const ALL: [File; 8] = [
        File::FileA,
        File::FileB,
        File::FileC,
        File::FileD,
        File::FileE,
        File::FileF,
        File::FileG,
        File::FileH,
    ];

    /// u8からFileに変換（0-7）
    #[inline]
    pub const fn from_u8(n: u8) -> Option<File> {
        if n < 8 { Some(File::ALL[n as usize]) } else { None }
    }

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// 升目表記の文字（'a'-'h'）に変換
    #[inline]
    pub const fn to_char(self) -> char {
        (b'a' + self as u8) as char
    }

    /// 升目表記の文字からFileに変換（大文字は不可）
    #[inline]
    pub const fn from_char(c: char) -> Option<File> {
        if !c.is_ascii() {
            return None;
        }
        File::from_u8((c as u8).wrapping_sub(b'a'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_from_u8() {
        assert_eq!(File::from_u8(0), Some(File::FileA));
        assert_eq!(File::from_u8(7), Some(File::FileH));
        assert_eq!(File::from_u8(8), None);
    }

    #[test]
    fn test_file_char() {
        assert_eq!(File::FileA.to_char(), 'a');
        assert_eq!(File::FileH.to_char(), 'h');
        assert_eq!(File::from_char('e'), Some(File::FileE));
        assert_eq!(File::from_char('E'), None);
        assert_eq!(File::from_char('i'), None);
        assert_eq!(File::from_char('é'), None);
    }
}

//! Element equality and search primitives consumed by the splitters

/// Search capability over slices of an element type.
///
/// The provided methods are plain linear scans built on `PartialEq`. Element
/// types with a faster primitive override them; `u8` routes through `memchr`.
/// Implement this (usually with an empty `impl` block) to split slices of your
/// own element type.
pub trait SliceSearch: PartialEq + Sized {
    /// Index of the first element equal to `needle`.
    #[inline]
    fn find_element(haystack: &[Self], needle: &Self) -> Option<usize> {
        haystack.iter().position(|item| item == needle)
    }

    /// Index of the leftmost contiguous occurrence of `needle`.
    ///
    /// An empty needle matches at index 0.
    #[inline]
    fn find_sequence(haystack: &[Self], needle: &[Self]) -> Option<usize> {
        if needle.is_empty() {
            return Some(0);
        }
        if needle.len() > haystack.len() {
            return None;
        }
        haystack
            .windows(needle.len())
            .position(|window| window == needle)
    }
}

impl SliceSearch for u8 {
    #[inline]
    fn find_element(haystack: &[u8], needle: &u8) -> Option<usize> {
        memchr::memchr(*needle, haystack)
    }

    #[inline]
    fn find_sequence(haystack: &[u8], needle: &[u8]) -> Option<usize> {
        match needle {
            [single] => memchr::memchr(*single, haystack),
            _ => memchr::memmem::find(haystack, needle),
        }
    }
}

macro_rules! impl_linear_search {
    ($($ty:ty),* $(,)?) => {
        $(impl SliceSearch for $ty {})*
    };
}

impl_linear_search!(i8, u16, i16, u32, i32, u64, i64, u128, i128, usize, isize, char, bool);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_search_matches_linear_scan() {
        let hay = b"arst,arst::ar";
        assert_eq!(u8::find_element(hay, &b','), Some(4));
        assert_eq!(u8::find_element(hay, &b'z'), None);
        assert_eq!(u8::find_sequence(hay, b"::"), Some(9));
        assert_eq!(u8::find_sequence(hay, b","), Some(4));
        assert_eq!(u8::find_sequence(hay, b"ar"), Some(0));
        assert_eq!(u8::find_sequence(hay, b"::x"), None);
    }

    #[test]
    fn generic_search_on_chars() {
        let hay: Vec<char> = "a::b".chars().collect();
        assert_eq!(char::find_element(&hay, &':'), Some(1));
        assert_eq!(char::find_sequence(&hay, &[':', ':']), Some(1));
        assert_eq!(char::find_sequence(&hay, &[':', 'b']), Some(2));
        assert_eq!(char::find_sequence(&hay, &['b', ':']), None);
    }

    #[test]
    fn needle_longer_than_haystack() {
        assert_eq!(u32::find_sequence(&[1, 2], &[1, 2, 3]), None);
        assert_eq!(u8::find_sequence(b"ab", b"abc"), None);
    }

    #[test]
    fn empty_needle_matches_at_start() {
        assert_eq!(i32::find_sequence(&[4, 5], &[]), Some(0));
        assert_eq!(u8::find_sequence(b"", b""), Some(0));
    }
}

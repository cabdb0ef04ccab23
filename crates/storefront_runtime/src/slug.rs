//! URL slugs derived from Vietnamese display names.

/// Folds one lowercase letter to its unaccented ASCII base, if it has one.
fn fold_accent(c: char) -> Option<char> {
    let base = match c {
        'à' | 'á' | 'ạ' | 'ả' | 'ã' | 'â' | 'ầ' | 'ấ' | 'ậ' | 'ẩ' | 'ẫ' | 'ă' | 'ằ' | 'ắ' | 'ặ'
        | 'ẳ' | 'ẵ' | 'ä' | 'å' => 'a',
        'è' | 'é' | 'ẹ' | 'ẻ' | 'ẽ' | 'ê' | 'ề' | 'ế' | 'ệ' | 'ể' | 'ễ' | 'ë' => 'e',
        'ì' | 'í' | 'ị' | 'ỉ' | 'ĩ' | 'î' | 'ï' => 'i',
        'ò' | 'ó' | 'ọ' | 'ỏ' | 'õ' | 'ô' | 'ồ' | 'ố' | 'ộ' | 'ổ' | 'ỗ' | 'ơ' | 'ờ' | 'ớ' | 'ợ'
        | 'ở' | 'ỡ' | 'ö' => 'o',
        'ù' | 'ú' | 'ụ' | 'ủ' | 'ũ' | 'ư' | 'ừ' | 'ứ' | 'ự' | 'ử' | 'ữ' | 'û' | 'ü' => 'u',
        'ỳ' | 'ý' | 'ỵ' | 'ỷ' | 'ỹ' | 'ÿ' => 'y',
        'đ' => 'd',
        'ç' => 'c',
        'ñ' => 'n',
        _ => return None,
    };
    Some(base)
}

fn is_combining_mark(c: char) -> bool {
    ('\u{0300}'..='\u{036f}').contains(&c)
}

/// Builds a URL slug: lowercase, accents stripped, `đ` as `d`, every run of other characters
/// collapsed to one `-`, no leading or trailing `-`.
pub fn generate_slug(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;
    for c in name.chars().flat_map(char::to_lowercase) {
        if is_combining_mark(c) {
            continue;
        }
        let c = fold_accent(c).unwrap_or(c);
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        } else {
            pending_dash = true;
        }
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vietnamese_names_fold_to_ascii() {
        assert_eq!(generate_slug("Lụa Tơ Tằm Vàng"), "lua-to-tam-vang");
        assert_eq!(generate_slug("Vải Gấm Đỏ"), "vai-gam-do");
        assert_eq!(generate_slug("ĐẶC BIỆT"), "dac-biet");
    }

    #[test]
    fn punctuation_runs_collapse_and_edges_trim() {
        assert_eq!(generate_slug("  Kate -- 100% (cotton)!  "), "kate-100-cotton");
        assert_eq!(generate_slug("***"), "");
        assert_eq!(generate_slug(""), "");
    }

    #[test]
    fn decomposed_marks_are_dropped() {
        assert_eq!(generate_slug("Vo\u{0302}\u{0301}i"), "voi");
    }
}

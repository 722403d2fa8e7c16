//! URL-style route parsing for the page shell.

use crate::app::Page;

/// Map a navigable path onto a page. The bare `/equipment` prefix and
/// anything unrecognized land on the sets dashboard.
pub fn parse(path: &str) -> Page {
    let trimmed = path.trim().trim_matches('/');
    let parts: Vec<&str> = trimmed.split('/').filter(|p| !p.is_empty()).collect();
    match parts.as_slice() {
        ["equipment", "list"] => Page::EquipmentList,
        ["equipment", "create"] => Page::EquipmentCreate,
        ["equipment", "sets", "create"] | ["equipment", "sets", "new"] => Page::SetCreate,
        ["equipment", "sets", id] => match id.parse() {
            Ok(set_id) => Page::SetDetail(set_id),
            Err(_) => Page::SetList,
        },
        ["equipment", "sets", id, "edit"] => match id.parse() {
            Ok(set_id) => Page::SetEdit(set_id),
            Err(_) => Page::SetList,
        },
        _ => Page::SetList,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equipment_redirects_to_sets() {
        assert_eq!(parse("/equipment"), Page::SetList);
        assert_eq!(parse("/equipment/sets"), Page::SetList);
        assert_eq!(parse("/equipment/sets/"), Page::SetList);
    }

    #[test]
    fn test_known_routes() {
        assert_eq!(parse("/equipment/list"), Page::EquipmentList);
        assert_eq!(parse("/equipment/create"), Page::EquipmentCreate);
        assert_eq!(parse("/equipment/sets/create"), Page::SetCreate);
        assert_eq!(parse("/equipment/sets/new"), Page::SetCreate);
        assert_eq!(parse("/equipment/sets/12"), Page::SetDetail(12));
        assert_eq!(parse("/equipment/sets/12/edit"), Page::SetEdit(12));
    }

    #[test]
    fn test_unmatched_falls_back_to_sets() {
        assert_eq!(parse(""), Page::SetList);
        assert_eq!(parse("/"), Page::SetList);
        assert_eq!(parse("/raids"), Page::SetList);
        assert_eq!(parse("/equipment/unknown/extra"), Page::SetList);
    }

    #[test]
    fn test_bad_set_id_falls_back_to_sets() {
        assert_eq!(parse("/equipment/sets/abc"), Page::SetList);
        assert_eq!(parse("/equipment/sets/abc/edit"), Page::SetList);
    }
}

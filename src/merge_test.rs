#[cfg(test)]
use super::merge_levels;

mod valid_cases {
    #[test]
    fn missing_zorder_is_zero_when_filtering() {
        let level = "[tile_map]\nx=\"0\"\ny=\"0\"\ntiles=\"1,2\n3,4\"\n[/tile_map]";
        let layers = super::merge_levels(&[level],&[0]).expect("level should merge");
        assert_eq!(layers.len(),1);
        assert_eq!(layers[0].zorder,0);
        assert_eq!(layers[0].grid_width(),2);
        assert_eq!(layers[0].width,2+5);
    }
    #[test]
    fn missing_zorder_groups_with_explicit_zero() {
        let with_zorder = "[tile_map]zorder=\"0\" tiles=\"a\"[/tile_map]";
        let without = "[tile_map]tiles=\"b\"[/tile_map]";
        let layers = super::merge_levels(&[with_zorder,without],&[]).expect("levels should merge");
        assert_eq!(layers.len(),1);
        assert_eq!(layers[0].rows[0],vec!["a","","","","","","b"]);
    }
    #[test]
    fn missing_zorder_dropped_by_other_filter() {
        let level = "[tile_map]tiles=\"1\"[/tile_map]";
        let layers = super::merge_levels(&[level],&[3]).expect("level should merge");
        assert!(layers.is_empty());
    }
    #[test]
    fn level_without_tags() {
        let layers = super::merge_levels(&["[level]\ntitle=\"empty\"\n[/level]"],&[]).expect("level should merge");
        assert!(layers.is_empty());
    }
}

mod invalid_cases {
    #[test]
    fn bad_coordinate() {
        let level = "[tile_map]x=\"left\" tiles=\"1\"[/tile_map]";
        assert!(super::merge_levels(&[level],&[]).is_err());
    }
}

#[cfg(test)]
use super::{extract_from_to,extract_tags,parse_level};

mod valid_cases {
    #[test]
    fn two_regions_in_order() {
        let data = "junk[a]first[/a] more [a]second[/a]tail";
        assert_eq!(super::extract_tags("a",data),vec!["first","second"]);
    }
    #[test]
    fn no_regions() {
        assert!(super::extract_tags("tile_map","[level]\nx=\"1\"\n[/level]").is_empty());
    }
    #[test]
    fn empty_body() {
        assert_eq!(super::extract_from_to("<",">","<><x>"),vec!["","x"]);
    }
    #[test]
    fn no_nesting() {
        // the first end tag closes the region
        let data = "[t]outer[t]inner[/t]rest[/t]";
        assert_eq!(super::extract_tags("t",data),vec!["outer[t]inner"]);
    }
    #[test]
    fn empty_tag_name() {
        assert_eq!(super::extract_tags("","[]body[/]"),vec!["body"]);
    }
    #[test]
    fn level_with_two_maps() {
        let level = "[level]
[tile_map]
x=\"32\"
y=\"-16\"
zorder=\"-2\"
tiles=\"1,2
3,4\"
[/tile_map]
[tile_map]
tiles=\"5\"
[/tile_map]
[/level]";
        let maps = super::parse_level(level).expect("level should parse");
        assert_eq!(maps.len(),2);
        assert_eq!((maps[0].x,maps[0].y,maps[0].zorder),(32,-16,-2));
        assert_eq!(maps[0].tiles,vec![vec!["1","2"],vec!["3","4"]]);
        assert_eq!((maps[1].x,maps[1].y,maps[1].zorder),(0,0,0));
        assert_eq!(maps[1].tiles,vec![vec!["5"]]);
    }
}

mod invalid_cases {
    #[test]
    fn missing_end_tag_stops_scan() {
        let data = "[a]one[/a][a]two[a]three";
        assert_eq!(super::extract_tags("a",data),vec!["one"]);
    }
    #[test]
    fn empty_start_delimiter() {
        assert!(super::extract_from_to("","]","abc]").is_empty());
    }
    #[test]
    fn non_integer_zorder() {
        let level = "[tile_map]zorder=\"top\" tiles=\"1\"[/tile_map]";
        match super::parse_level(level) {
            Err(super::super::Error::BadInteger { key, value }) => {
                assert_eq!(key,"zorder");
                assert_eq!(value,"top");
            },
            _ => panic!("expected a bad integer error")
        }
    }
}

#[cfg(test)]
use super::parse_tag_contents;
#[cfg(test)]
use std::collections::HashMap;

#[cfg(test)]
fn to_map(pairs: &[(&str,&str)]) -> HashMap<String,String> {
    pairs.iter().map(|(k,v)| (k.to_string(),v.to_string())).collect()
}

mod valid_cases {
    use super::to_map;
    #[test]
    fn simple_pairs() {
        let body = "\nx=\"0\"\ny=\"-320\"\nzorder=\"-2\"\n";
        assert_eq!(super::parse_tag_contents(body),to_map(&[("x","0"),("y","-320"),("zorder","-2")]));
    }
    #[test]
    fn keys_and_values_trimmed() {
        let body = "  x =  \" 16 \"  tiles=\"\n1,2\n\"";
        assert_eq!(super::parse_tag_contents(body),to_map(&[("x","16"),("tiles","1,2")]));
    }
    #[test]
    fn last_key_wins() {
        let body = "x=\"1\" x=\"2\"";
        assert_eq!(super::parse_tag_contents(body),to_map(&[("x","2")]));
    }
    #[test]
    fn reparse_serialized() {
        let original = to_map(&[("x","48"),("id","cave"),("tiles","a,b\nc,d"),("empty","")]);
        let mut body = String::new();
        for (k,v) in &original {
            body += &format!("{}=\"{}\"\n",k,v);
        }
        assert_eq!(super::parse_tag_contents(&body),original);
    }
    #[test]
    fn blank_body() {
        assert!(super::parse_tag_contents(" \n\t ").is_empty());
    }
}

mod invalid_cases {
    use super::to_map;
    #[test]
    fn trailing_text_ignored() {
        let body = "x=\"1\" dangling";
        assert_eq!(super::parse_tag_contents(body),to_map(&[("x","1")]));
    }
    #[test]
    fn unterminated_value() {
        let body = "x=\"1\" y=\"2";
        assert_eq!(super::parse_tag_contents(body),to_map(&[("x","1")]));
    }
    #[test]
    fn embedded_quote_garbles() {
        // values cannot hold quotes, the scan resynchronizes on the next `=`
        let body = "title=\"say \"hi\"\" x=\"1\"";
        let ans = super::parse_tag_contents(body);
        assert_eq!(ans.get("title").map(|s| s.as_str()),Some("say"));
        assert_ne!(ans.get("title").map(|s| s.as_str()),Some("say \"hi\""));
    }
}

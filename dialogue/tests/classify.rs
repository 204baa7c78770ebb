use dialogue::directive::{Directive, Setting, Side};
use dialogue::parser::{Parser, classify_line, split_lines};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn title(side: Side, title: &str, enforced_id: Option<&str>) -> Directive {
    Directive::Title {
        side,
        title: title.to_string(),
        enforced_id: enforced_id.map(str::to_string),
    }
}

fn setting(setting: Setting, value: &str) -> Directive {
    Directive::Setting {
        setting,
        value: value.to_string(),
    }
}

#[rstest]
#[case("left: Alice", title(Side::Left, "Alice", None))]
#[case("l: Alice", title(Side::Left, "Alice", None))]
#[case("LEFT:Alice", title(Side::Left, "Alice", None))]
#[case("right: Bob", title(Side::Right, "Bob", None))]
#[case("r-12: Bob", title(Side::Right, "Bob", Some("12")))]
#[case("center: Narrator", title(Side::Center, "Narrator", None))]
#[case("C-1:Narrator", title(Side::Center, "Narrator", Some("1")))]
#[case("left: 10:30 meeting", title(Side::Left, "10:30 meeting", None))]
#[case("left:", title(Side::Left, "", None))]
fn title_directives(#[case] line: &str, #[case] expected: Directive) {
    assert_eq!(classify_line(line), expected);
}

#[rstest]
#[case("lf: sent", Side::Left, "sent")]
#[case("leftFooter: sent", Side::Left, "sent")]
#[case("RF:read", Side::Right, "read")]
#[case("rightfooter: read", Side::Right, "read")]
#[case("cf: noted", Side::Center, "noted")]
#[case("centerFooter: a: b", Side::Center, "a: b")]
fn footer_default_directives(#[case] line: &str, #[case] side: Side, #[case] content: &str) {
    assert_eq!(
        classify_line(line),
        Directive::FooterDefault {
            side,
            content: content.to_string()
        }
    );
}

#[rstest]
#[case("titleMode: ALL", setting(Setting::TitleMode, "all"))]
#[case("titlemode:first", setting(Setting::TitleMode, "first"))]
#[case("footerMode: all", setting(Setting::FooterMode, "all"))]
#[case("messageMaxWidth: 80PX", setting(Setting::MessageMaxWidth, "80PX"))]
#[case("commentMaxWidth: 50%", setting(Setting::CommentMaxWidth, "50%"))]
#[case("clean: True", setting(Setting::Clean, "true"))]
#[case("renderMarkdownTitle: true", setting(Setting::RenderMarkdownTitle, "true"))]
#[case("renderMarkdownContent: no", setting(Setting::RenderMarkdownContent, "no"))]
#[case("renderMarkdownFooter: true", setting(Setting::RenderMarkdownFooter, "true"))]
#[case("renderMarkdownComment: TRUE", setting(Setting::RenderMarkdownComment, "true"))]
fn setting_directives(#[case] line: &str, #[case] expected: Directive) {
    assert_eq!(classify_line(line), expected);
}

#[rstest]
#[case("-", Directive::Delimiter)]
#[case("delimiter", Directive::Delimiter)]
#[case("Delimiter", Directive::Unparsed("Delimiter".to_string()))]
#[case("--", Directive::Unparsed("--".to_string()))]
#[case("#note", Directive::Comment("note".to_string()))]
#[case("## heading", Directive::Comment("# heading".to_string()))]
#[case("<Hi", Directive::Message { side: Side::Left, content: "Hi".to_string() })]
#[case(">  Hello ", Directive::Message { side: Side::Right, content: "Hello".to_string() })]
#[case("=Meanwhile", Directive::Message { side: Side::Center, content: "Meanwhile".to_string() })]
#[case("<", Directive::Message { side: Side::Left, content: String::new() })]
#[case("::bye", Directive::FooterAttachment("bye".to_string()))]
#[case(":: bye", Directive::FooterAttachment(" bye".to_string()))]
#[case("not a directive", Directive::Unparsed("not a directive".to_string()))]
fn structural_directives(#[case] line: &str, #[case] expected: Directive) {
    assert_eq!(classify_line(line), expected);
}

#[test]
fn earlier_rules_win() {
    // A title directive never doubles as anything else.
    assert!(matches!(classify_line("left: <Hi"), Directive::Title { .. }));
    // Setting keywords that start like side prefixes are not titles.
    assert!(matches!(
        classify_line("clean: true"),
        Directive::Setting { setting: Setting::Clean, .. }
    ));
    assert!(matches!(
        classify_line("renderMarkdownTitle: true"),
        Directive::Setting { .. }
    ));
    // Footer prefixes are not titles either.
    assert!(matches!(
        classify_line("leftFooter: x"),
        Directive::FooterDefault { .. }
    ));
    // `#` wins over message operators further into the line.
    assert!(matches!(classify_line("#<Hi"), Directive::Comment(_)));
    // A message body may start with `::`.
    assert!(matches!(
        classify_line("<::quoted"),
        Directive::Message { .. }
    ));
}

#[test]
fn unknown_side_prefix_is_unparsed() {
    assert_eq!(
        classify_line("x: hello"),
        Directive::Unparsed("x: hello".to_string())
    );
    assert_eq!(
        classify_line("l-x: hello"),
        Directive::Unparsed("l-x: hello".to_string())
    );
}

#[test]
fn split_lines_trims_and_drops_empty_lines() {
    let source = "  <Hi  \r\n\r\n\t>Hello\n   \n-";
    let lines = split_lines(source);
    let texts: Vec<&str> = lines.iter().map(|l| l.text).collect();
    assert_eq!(texts, vec!["<Hi", ">Hello", "-"]);
    for line in &lines {
        assert_eq!(&source[line.span.clone()], line.text);
    }
}

#[test]
fn parser_keeps_document_order_and_spans() {
    let source = "left: Alice\n<Hi\n::bye";
    let script = Parser::new(source.to_string(), 7).parse();
    assert_eq!(script.source_id, 7);
    assert_eq!(script.lines.len(), 3);
    assert_eq!(script.lines[0].span, 0..11);
    assert_eq!(script.lines[1].span, 12..15);
    assert_eq!(script.lines[2].span, 16..21);
    assert_eq!(
        script.lines[2].directive,
        Directive::FooterAttachment("bye".to_string())
    );
}

#[test]
fn empty_source_parses_to_empty_script() {
    assert!(Parser::new("\n \r\n".to_string(), 0).parse().is_empty());
}

use dialogue::config::DialogueConfig;
use dialogue::directive::{Directive, FooterMode, Line, Setting, Side, TitleMode};
use pretty_assertions::assert_eq;
use rstest::rstest;
use renderer::executor::{Step, apply_setting, execute_directive};
use renderer::instruction::RenderInstruction;
use renderer::session::{Participant, ParticipantRegistry, SessionState};
use renderer::{ElementTree, NodeId, RenderError, RenderSink, Role, Warning};

fn state() -> SessionState {
    SessionState::new(&DialogueConfig::default(), NodeId(1))
}

fn line(directive: Directive) -> Line {
    Line {
        directive,
        span: 0..1,
    }
}

fn execute(directive: Directive, state: &mut SessionState) -> (Step, Vec<Warning>) {
    let mut warnings = Vec::new();
    let step = execute_directive(&line(directive), state, &mut warnings, 0);
    (step, warnings)
}

// ---------------------------------------------------------------------------
// Participants and registry
// ---------------------------------------------------------------------------

#[test]
fn first_mode_marks_title_as_shown() {
    let mut participant = Participant::new("Alice");
    assert!(participant.should_render_title(TitleMode::First));
    assert!(participant.rendered_once);
    assert!(!participant.should_render_title(TitleMode::First));

    participant.retitle("Alice".to_string(), None);
    assert!(!participant.rendered_once);
    assert!(participant.should_render_title(TitleMode::First));
}

#[rstest]
#[case(TitleMode::Disabled, "Alice", false)]
#[case(TitleMode::All, "Alice", true)]
#[case(TitleMode::All, "", false)]
#[case(TitleMode::First, "", false)]
fn title_visibility(#[case] mode: TitleMode, #[case] title: &str, #[case] expected: bool) {
    let mut participant = Participant::new(title);
    assert_eq!(participant.should_render_title(mode), expected);
    assert_eq!(participant.should_render_title(mode), expected && mode == TitleMode::All);
}

#[test]
fn other_modes_leave_first_flag_alone() {
    let mut participant = Participant::new("Alice");
    participant.should_render_title(TitleMode::All);
    participant.should_render_title(TitleMode::Disabled);
    assert!(!participant.rendered_once);
}

#[test]
fn registry_ordinals_are_stable() {
    let mut registry = ParticipantRegistry::new();
    assert_eq!(registry.register("Bob"), Some(1));
    assert_eq!(registry.register("Alice"), Some(2));
    assert_eq!(registry.register("Bob"), Some(1));
    assert_eq!(registry.register(""), None);
    assert_eq!(registry.titles(), ["Bob", "Alice"]);
    assert_eq!(registry.len(), 2);
}

// ---------------------------------------------------------------------------
// Session setup
// ---------------------------------------------------------------------------

#[test]
fn session_starts_from_config() {
    let config = DialogueConfig {
        default_center_title: "Narrator".to_string(),
        default_left_footer: "sent".to_string(),
        default_clean: true,
        default_render_markdown_comment: true,
        default_comment_max_width: "40%".to_string(),
        ..DialogueConfig::default()
    };
    let state = SessionState::new(&config, NodeId(4));
    assert_eq!(state.participants[Side::Center].title, "Narrator");
    assert_eq!(state.participants[Side::Left].title, "");
    assert_eq!(state.footers[Side::Left].content, "sent");
    assert!(state.clean);
    assert!(state.markdown.comment);
    assert!(!state.markdown.content);
    assert_eq!(state.comment_max_width, "40%");
    assert_eq!(state.message_max_width, "60%");
    assert_eq!(state.wrapper, NodeId(4));
}

#[test]
fn default_footer_requires_mode_and_content() {
    let mut state = state();
    state.footers[Side::Right].content = "read".to_string();
    assert_eq!(state.default_footer(Side::Right), None);

    state.footer_mode = FooterMode::All;
    assert_eq!(state.default_footer(Side::Right), Some("read".to_string()));
    assert_eq!(state.default_footer(Side::Left), None);
}

// ---------------------------------------------------------------------------
// Executor
// ---------------------------------------------------------------------------

#[rstest]
#[case(Setting::TitleMode, "all")]
#[case(Setting::FooterMode, "all")]
#[case(Setting::MessageMaxWidth, "75%")]
#[case(Setting::Clean, "true")]
#[case(Setting::RenderMarkdownFooter, "true")]
fn valid_settings_apply(#[case] setting: Setting, #[case] value: &str) {
    let mut state = state();
    assert_eq!(apply_setting(&mut state, setting, value), Ok(()));
    match setting {
        Setting::TitleMode => assert_eq!(state.title_mode, TitleMode::All),
        Setting::FooterMode => assert_eq!(state.footer_mode, FooterMode::All),
        Setting::MessageMaxWidth => assert_eq!(state.message_max_width, "75%"),
        Setting::Clean => assert!(state.clean),
        Setting::RenderMarkdownFooter => assert!(state.markdown.footer),
        _ => unreachable!(),
    }
}

#[test]
fn invalid_enum_value_keeps_previous_and_warns() {
    let mut state = state();
    state.title_mode = TitleMode::All;
    let (step, warnings) = execute(
        Directive::Setting {
            setting: Setting::TitleMode,
            value: "sometimes".to_string(),
        },
        &mut state,
    );
    assert_eq!(step, Step::Nothing);
    assert_eq!(state.title_mode, TitleMode::All);
    assert_eq!(warnings.len(), 1);
    assert_eq!(
        warnings[0].message,
        "unknown titleMode value 'sometimes' (expected one of: disabled, all, first); keeping the previous value"
    );
}

#[test]
fn toggles_turn_off_for_anything_but_true() {
    let mut state = state();
    state.markdown.title = true;
    apply_setting(&mut state, Setting::RenderMarkdownTitle, "yes").unwrap();
    assert!(!state.markdown.title);
}

#[test]
fn message_snapshots_participant_and_footer() {
    let mut state = state();
    state.footer_mode = FooterMode::All;
    execute(
        Directive::Title {
            side: Side::Left,
            title: "Alice".to_string(),
            enforced_id: Some("9".to_string()),
        },
        &mut state,
    );
    execute(
        Directive::FooterDefault {
            side: Side::Left,
            content: "sent".to_string(),
        },
        &mut state,
    );

    let (step, warnings) = execute(
        Directive::Message {
            side: Side::Left,
            content: "hi".to_string(),
        },
        &mut state,
    );
    assert!(warnings.is_empty());
    let Step::Render(RenderInstruction::Message(message)) = step else {
        panic!("expected a message instruction, got {:?}", step);
    };
    assert_eq!(message.content, "hi");
    assert_eq!(message.participant.title, "Alice");
    assert_eq!(message.participant.id.as_deref(), Some("9"));
    assert_eq!(message.default_footer.as_deref(), Some("sent"));
    assert!(!message.markdown_footer);
    assert_eq!(state.registry.ordinal("Alice"), Some(1));
}

#[test]
fn structural_lines_become_instructions() {
    let mut state = state();
    assert_eq!(
        execute(Directive::Delimiter, &mut state).0,
        Step::Render(RenderInstruction::Delimiter)
    );
    assert_eq!(
        execute(Directive::Comment("x".to_string()), &mut state).0,
        Step::Render(RenderInstruction::Comment("x".to_string()))
    );
    assert_eq!(
        execute(Directive::FooterAttachment(" y".to_string()), &mut state).0,
        Step::AttachFooter(" y".to_string())
    );
    assert_eq!(
        execute(Directive::Unparsed("z".to_string()), &mut state).0,
        Step::Render(RenderInstruction::UnparsedLine("z".to_string()))
    );

    state.clean = true;
    assert_eq!(
        execute(Directive::Unparsed("z".to_string()), &mut state).0,
        Step::Nothing
    );
}

// ---------------------------------------------------------------------------
// Element tree sink
// ---------------------------------------------------------------------------

#[test]
fn tree_overwrites_attributes_and_styles() {
    let mut tree = ElementTree::new();
    let node = tree.create_element(tree.root(), Role::Wrapper, &["a"]).unwrap();
    tree.set_attribute(node, "data-x", "1").unwrap();
    tree.set_attribute(node, "data-x", "2").unwrap();
    tree.set_style(node, "max-width", "10%").unwrap();
    tree.set_style(node, "max-width", "20%").unwrap();

    let element = tree.get(node).unwrap();
    assert_eq!(element.attributes.len(), 1);
    assert_eq!(element.attribute("data-x"), Some("2"));
    assert_eq!(element.style("max-width"), Some("20%"));
    assert_eq!(
        tree.to_html(),
        "<div class=\"a\" data-x=\"2\" style=\"max-width: 20%;\"></div>"
    );
}

#[test]
fn appending_html_to_text_escapes_the_text() {
    let mut tree = ElementTree::new();
    let node = tree.create_element(tree.root(), Role::Content, &[]).unwrap();
    tree.set_text(node, "a<b").unwrap();
    assert_eq!(tree.get(node).unwrap().text(), Some("a<b"));
    tree.append_html(node, "<em>c</em>").unwrap();
    assert_eq!(tree.get(node).unwrap().text(), None);
    assert_eq!(tree.to_html(), "<div>a&lt;b<em>c</em></div>");
}

#[test]
fn attribute_values_are_escaped() {
    let mut tree = ElementTree::new();
    let node = tree.create_element(tree.root(), Role::Message(Side::Left), &[]).unwrap();
    tree.set_attribute(node, "data-participant", "\"Q\" & A").unwrap();
    assert_eq!(
        tree.to_html(),
        "<div data-participant=\"&quot;Q&quot; &amp; A\"></div>"
    );
    assert_eq!(
        tree.outline(),
        "message-left data-participant=\"\\\"Q\\\" & A\"\n"
    );
}

#[test]
fn unknown_nodes_are_errors() {
    let mut tree = ElementTree::new();
    let err = tree.set_text(NodeId(7), "x").unwrap_err();
    assert!(matches!(err, RenderError::UnknownNode(NodeId(7))));
    assert!(tree.create_element(NodeId(7), Role::Title, &[]).is_err());
    assert!(tree.is_empty());
}

use std::sync::OnceLock;

use regex::Regex;

use crate::directive::{Directive, Setting, Side};

// Recognition is order-sensitive: the first rule that matches wins.

fn title_regex() -> &'static Regex {
    static TITLE: OnceLock<Regex> = OnceLock::new();
    TITLE.get_or_init(|| {
        Regex::new(r"(?i)^(l|left|r|right|c|center)(?:-([0-9]+))?:(.*)$")
            .expect("Invalid title directive regex")
    })
}

fn footer_regex() -> &'static Regex {
    static FOOTER: OnceLock<Regex> = OnceLock::new();
    FOOTER.get_or_init(|| {
        Regex::new(r"(?i)^(lf|leftfooter|rf|rightfooter|cf|centerfooter):(.*)$")
            .expect("Invalid footer directive regex")
    })
}

/// Classify one trimmed, non-empty line.
pub fn classify_line(line: &str) -> Directive {
    if let Some(directive) = classify_title(line) {
        return directive;
    }
    if let Some(directive) = classify_footer_default(line) {
        return directive;
    }
    if let Some(directive) = classify_setting(line) {
        return directive;
    }
    if line == "-" || line == "delimiter" {
        return Directive::Delimiter;
    }
    if let Some(rest) = line.strip_prefix('#') {
        return Directive::Comment(rest.to_string());
    }
    if let Some(directive) = classify_message(line) {
        return directive;
    }
    if let Some(rest) = line.strip_prefix("::") {
        return Directive::FooterAttachment(rest.to_string());
    }
    Directive::Unparsed(line.to_string())
}

fn classify_title(line: &str) -> Option<Directive> {
    let caps = title_regex().captures(line)?;
    let side = match caps[1].to_ascii_lowercase().as_str() {
        "l" | "left" => Side::Left,
        "r" | "right" => Side::Right,
        _ => Side::Center,
    };
    Some(Directive::Title {
        side,
        title: caps[3].trim().to_string(),
        enforced_id: caps.get(2).map(|m| m.as_str().to_string()),
    })
}

fn classify_footer_default(line: &str) -> Option<Directive> {
    let caps = footer_regex().captures(line)?;
    let side = match caps[1].to_ascii_lowercase().as_str() {
        "lf" | "leftfooter" => Side::Left,
        "rf" | "rightfooter" => Side::Right,
        _ => Side::Center,
    };
    Some(Directive::FooterDefault {
        side,
        content: caps[2].trim().to_string(),
    })
}

fn classify_setting(line: &str) -> Option<Directive> {
    Setting::ALL.into_iter().find_map(|setting| {
        let keyword = setting.keyword();
        let head = line.get(..keyword.len())?;
        if !head.eq_ignore_ascii_case(keyword) {
            return None;
        }
        let rest = line[keyword.len()..].strip_prefix(':')?.trim();
        let value = if setting.lowercases_value() {
            rest.to_lowercase()
        } else {
            rest.to_string()
        };
        Some(Directive::Setting { setting, value })
    })
}

fn classify_message(line: &str) -> Option<Directive> {
    let operator = line.chars().next()?;
    let side = Side::from_operator(operator)?;
    Some(Directive::Message {
        side,
        content: line[operator.len_utf8()..].trim().to_string(),
    })
}

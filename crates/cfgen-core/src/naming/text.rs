use heck::ToUpperCamelCase;

/// Strip characters that cannot appear in an identifier.
///
/// Brackets and parentheses open a new word (`_`), their closing halves are
/// dropped, `.`, `-` and spaces become `_`, and anything else outside
/// `[A-Za-z0-9_]` is removed. A lone `$` becomes `value`.
pub fn sanitize_name(name: &str) -> String {
    if name == "$" {
        return "value".to_string();
    }
    let name = name.replace("[]", "");
    let mut result = String::with_capacity(name.len());
    for ch in name.chars() {
        match ch {
            '[' | '(' | '.' | '-' | ' ' => result.push('_'),
            ']' | ')' => {}
            c if c.is_ascii_alphanumeric() || c == '_' => result.push(c),
            _ => {}
        }
    }
    result
}

/// Name of a punctuation-only value, e.g. `$` -> `Dollar`.
pub fn symbol_name(value: &str) -> Option<&'static str> {
    let name = match value {
        "$" => "Dollar",
        "^" => "Caret",
        "|" => "Pipe",
        "=" => "Equal",
        "*" => "Star",
        "-" => "Minus",
        "&" => "Ampersand",
        "%" => "Percent",
        "#" => "Hash",
        "@" => "At",
        "!" => "Exclamation",
        "+" => "Plus",
        ":" => "Colon",
        ">" => "Greater_Than",
        "<" => "Less_Than",
        "." => "Period",
        "_" => "Underscore",
        "?" => "Question_Mark",
        "," => "Comma",
        "'" => "Quote",
        "\"" => "Double_Quote",
        "/" => "Slash",
        "\\" => "Back_Slash",
        "(" => "Left_Parenthesis",
        ")" => "Right_Parenthesis",
        "{" => "Left_Curly_Bracket",
        "}" => "Right_Curly_Bracket",
        "[" => "Left_Square_Bracket",
        "]" => "Right_Square_Bracket",
        "~" => "Tilde",
        "`" => "Backtick",
        "<=" => "Less_Than_Or_Equal_To",
        ">=" => "Greater_Than_Or_Equal_To",
        "!=" => "Not_Equal",
        _ => return None,
    };
    Some(name)
}

/// Entirely upper-case letters and underscores, with at least one letter.
pub fn is_all_caps(name: &str) -> bool {
    name.chars().any(|c| c.is_ascii_uppercase())
        && name.chars().all(|c| c.is_ascii_uppercase() || c == '_')
}

pub fn starts_with_digit(name: &str) -> bool {
    name.chars().next().is_some_and(|c| c.is_ascii_digit())
}

pub fn upper_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Derive a camelCase operation name from HTTP method + path.
///
/// - `GET /users` -> `listUsers`
/// - `GET /users/{userId}` -> `getUser`
/// - `POST /users/{userId}/messages` -> `createUsersMessages`
pub fn route_to_name(method: &str, path: &str) -> String {
    let mut resource_parts: Vec<&str> = Vec::new();
    let mut ends_with_param = false;

    for seg in path.split('/').filter(|s| !s.is_empty()) {
        if seg.starts_with('{') && seg.ends_with('}') {
            ends_with_param = true;
        } else {
            resource_parts.push(seg);
            ends_with_param = false;
        }
    }

    let method_lower = method.to_lowercase();
    let prefix = match method_lower.as_str() {
        "get" if ends_with_param => "get",
        "get" => "list",
        "post" => "create",
        "put" => "update",
        other => other,
    };

    let last = resource_parts.len().saturating_sub(1);
    let resource: String = resource_parts
        .iter()
        .enumerate()
        .map(|(i, part)| {
            if i == last && ends_with_param {
                singularize(part).to_upper_camel_case()
            } else {
                part.to_upper_camel_case()
            }
        })
        .collect();

    format!("{prefix}{resource}")
}

fn singularize(word: &str) -> String {
    if let Some(stem) = word.strip_suffix("ies").filter(|s| !s.is_empty()) {
        format!("{stem}y")
    } else if word.ends_with("ses") || word.ends_with("xes") || word.ends_with("zes") {
        word[..word.len() - 2].to_string()
    } else if word.len() > 1 && word.ends_with('s') && !word.ends_with("ss") {
        word[..word.len() - 1].to_string()
    } else {
        word.to_string()
    }
}

use dioxus::prelude::*;

#[derive(Clone, PartialEq)]
pub enum Size {
    Small,
    Large,
}

const COLORS: [&str; 8] = [
    "#ef4444", "#3b82f6", "#22c55e", "#eab308", "#a855f7", "#ec4899", "#6366f1", "#6b7280",
];

fn initials(nick: &str) -> String {
    nick.split(|c: char| c.is_whitespace() || c == '_' || c == '-')
        .filter_map(|word| word.chars().next())
        .collect::<String>()
        .to_uppercase()
        .chars()
        .take(2)
        .collect()
}

fn color(initials: &str) -> &'static str {
    let idx = initials
        .chars()
        .fold(0, |pv, cv| (pv + cv as usize) % COLORS.len());

    COLORS[idx]
}

/// User avatar, `src` being the data URL stored on the profile.
#[component]
pub fn Avatar(src: String, nick: String, size: Size) -> Element {
    let size_class = match size {
        Size::Small => "avatar avatar-small",
        Size::Large => "avatar avatar-large",
    };

    if src.starts_with("data:image") {
        return rsx! {
            img {
                src,
                alt: nick,
                class: size_class
            }
        };
    }

    let initials = initials(&nick);
    let background = color(&initials);

    rsx! {
        div {
            class: size_class,
            style: "background-color: {background}",
            "{initials}"
        }
    }
}

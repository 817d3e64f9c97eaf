use yew::prelude::*;

/// Every icon the sections can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Icon {
    Brain,
    Plane,
    GraduationCap,
    Award,
    Microscope,
    Lightbulb,
    #[default]
    Zap,
    Globe,
    FileCheck,
    BookOpen,
    Rocket,
    DollarSign,
    Handshake,
    Users,
    Presentation,
    Calendar,
    ChevronRight,
}

impl Icon {
    /// Resolves an icon by name. Unknown names resolve to `Icon::Zap`;
    /// callers rely on always getting something drawable back.
    pub fn from_name(name: &str) -> Icon {
        match name {
            "Brain" => Icon::Brain,
            "Plane" => Icon::Plane,
            "GraduationCap" => Icon::GraduationCap,
            "Award" => Icon::Award,
            "Microscope" => Icon::Microscope,
            "Lightbulb" => Icon::Lightbulb,
            "Zap" => Icon::Zap,
            "Globe" => Icon::Globe,
            "FileCheck" => Icon::FileCheck,
            "BookOpen" => Icon::BookOpen,
            "Rocket" => Icon::Rocket,
            "DollarSign" => Icon::DollarSign,
            "Handshake" => Icon::Handshake,
            "Users" => Icon::Users,
            "Presentation" => Icon::Presentation,
            "Calendar" => Icon::Calendar,
            "ChevronRight" => Icon::ChevronRight,
            _ => Icon::default(),
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Brain => "🧠",
            Icon::Plane => "✈️",
            Icon::GraduationCap => "🎓",
            Icon::Award => "🏅",
            Icon::Microscope => "🔬",
            Icon::Lightbulb => "💡",
            Icon::Zap => "⚡",
            Icon::Globe => "🌍",
            Icon::FileCheck => "📋",
            Icon::BookOpen => "📖",
            Icon::Rocket => "🚀",
            Icon::DollarSign => "💰",
            Icon::Handshake => "🤝",
            Icon::Users => "👥",
            Icon::Presentation => "📊",
            Icon::Calendar => "📅",
            Icon::ChevronRight => "›",
        }
    }

    pub fn render(self, size: u32, color: &str) -> Html {
        let style = format!(
            "font-size: {}px; line-height: 1; color: {}; display: inline-flex; width: {}px; height: {}px; align-items: center; justify-content: center;",
            size, color, size, size
        );
        html! {
            <span class="icon" style={style} aria-hidden="true">{ self.glyph() }</span>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_names_resolve() {
        assert_eq!(Icon::from_name("Brain"), Icon::Brain);
        assert_eq!(Icon::from_name("GraduationCap"), Icon::GraduationCap);
        assert_eq!(Icon::from_name("Lightbulb"), Icon::Lightbulb);
    }

    #[test]
    fn unknown_names_fall_back_to_zap() {
        assert_eq!(Icon::from_name("Spaceship"), Icon::Zap);
        assert_eq!(Icon::from_name(""), Icon::Zap);
        assert_eq!(Icon::from_name("brain"), Icon::Zap);
    }
}

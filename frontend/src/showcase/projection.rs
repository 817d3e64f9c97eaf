use super::catalog::CatalogItem;
use super::icon::Icon;

/// What the phone mockup shows for the active item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailPayload {
    pub heading: &'static str,
    pub body: &'static str,
    pub bullet_list: &'static [&'static str],
    pub accent_color: &'static str,
    pub icon: Icon,
    pub backdrop: &'static str,
    pub caption: String,
}

impl From<&'static CatalogItem> for DetailPayload {
    fn from(item: &'static CatalogItem) -> Self {
        Self {
            heading: item.tagline,
            body: item.description,
            bullet_list: item.features,
            accent_color: item.accent_color,
            icon: item.icon,
            backdrop: item.layout_variant,
            caption: format!("{} Portal", item.title),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::showcase::catalog::services;
    use crate::showcase::selection::SelectionState;

    #[test]
    fn maps_fields_directly() {
        let item = &services().items()[1];
        let payload = DetailPayload::from(item);
        assert_eq!(payload.heading, "Study Abroad Admissions");
        assert_eq!(payload.body, item.description);
        assert_eq!(payload.bullet_list, item.features);
        assert_eq!(payload.accent_color, "#059669");
        assert_eq!(payload.icon, Icon::Plane);
        assert_eq!(payload.caption, "Study abroad Portal");
    }

    #[test]
    fn follows_selection() {
        let mut state = SelectionState::new(services());
        assert_eq!(DetailPayload::from(state.active_item()).icon, Icon::Brain);
        state.select(6);
        let payload = DetailPayload::from(state.active_item());
        assert_eq!(payload.heading, "Investors Connect");
        assert_eq!(payload.accent_color, "#EC4899");
    }
}

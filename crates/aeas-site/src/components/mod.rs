pub(crate) mod comments;
pub(crate) mod content_card;
pub(crate) mod empty_state;
pub(crate) mod entity_menu;
pub(crate) mod faq_accordion;
pub(crate) mod html_block;
pub(crate) mod locale_menu;
pub(crate) mod newsletter;
pub(crate) mod pagination;
pub(crate) mod shell;
pub(crate) mod theme_toggle;
pub(crate) mod ticker;
pub(crate) mod toast;

pub mod autocomplete {
    mod model;
    mod view;

    pub use model::{AutocompleteLayout, WIDGET_WIDTH};
    pub use view::AutocompleteView;
}

pub mod footer {
    mod view;

    pub use view::Footer;
}

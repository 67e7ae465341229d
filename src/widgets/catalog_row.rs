use super::super::prelude::*;
use super::super::models::Product;

use std::cell::{Cell, RefCell};
use std::sync::OnceLock;
use glib::subclass::Signal;

const ADD_REQUESTED_SIGNAL: &str = "add-requested";

fn price_label(price: f64) -> String {
    format!("${price}")
}

mod imp {
    use super::*;

    #[derive(Default, gtk::CompositeTemplate, glib::Properties)]
    #[template(resource = "/io/github/storefront/catalog_row.ui")]
    #[properties(wrapper_type = super::CatalogRow)]
    pub struct CatalogRow {
        #[template_child(id = "catalog-row-price")]
        pub price_label: TemplateChild<gtk::Label>,
        #[template_child(id = "catalog-row-add-button")]
        pub add_button: TemplateChild<gtk::Button>,

        #[property(get, set, name = "product-name")]
        pub product_name: RefCell<String>,
        #[property(get, set)]
        pub description: RefCell<String>,
        #[property(get, set)]
        pub price: Cell<f64>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for CatalogRow {
        const NAME: &'static str = "CatalogRow";
        type Type = super::CatalogRow;
        type ParentType = adw::ActionRow;

        fn class_init(class: &mut Self::Class) {
            Self::bind_template(class);
        }

        fn instance_init(object: &glib::subclass::InitializingObject<Self>) {
            object.init_template();
        }
    }

    #[glib::derived_properties]
    impl ObjectImpl for CatalogRow {
        fn constructed(&self) {
            self.parent_constructed();
            self.obj().setup_labels();
            self.obj().setup_add_button();
        }

        fn signals() -> &'static [Signal] {
            static SIGNALS: OnceLock<[Signal; 1]> = OnceLock::new();
            SIGNALS.get_or_init(|| {
                [
                    Signal::builder(ADD_REQUESTED_SIGNAL).build()
                ]
            })
        }
    }

    impl WidgetImpl for CatalogRow {}
    impl ListBoxRowImpl for CatalogRow {}
    impl PreferencesRowImpl for CatalogRow {}
    impl ActionRowImpl for CatalogRow {}
}

glib::wrapper! {
    pub struct CatalogRow(ObjectSubclass<imp::CatalogRow>)
        @extends adw::ActionRow, adw::PreferencesRow, gtk::ListBoxRow, gtk::Widget,
        @implements gtk::Accessible, gtk::Actionable, gtk::Buildable, gtk::ConstraintTarget;
}

impl CatalogRow {

    fn setup_labels(&self) {
        self.connect_product_name_notify(|row| {
            row.set_title(&glib::markup_escape_text(&row.product_name()));
        });

        self.connect_description_notify(|row| {
            row.set_subtitle(&glib::markup_escape_text(&row.description()));
        });

        self.connect_price_notify(|row| {
            row.imp().price_label.set_label(&price_label(row.price()));
        });
    }

    fn setup_add_button(&self) {
        let this_weak = self.downgrade();
        self.imp().add_button.connect_clicked(move |_button| {
            if let Some(this) = this_weak.upgrade() {
                this.emit_by_name::<()>(ADD_REQUESTED_SIGNAL, &[]);
            }
        });
    }

    pub fn from_product(product: &Product) -> Self {
        glib::Object::builder()
            .property("product-name", product.name)
            .property("description", product.description)
            .property("price", product.price)
            .build()
    }

    pub fn connect_add_requested<F>(&self, callback: F) -> glib::SignalHandlerId
    where
        F: Fn(&Self) + 'static,
    {
        self.connect_local(ADD_REQUESTED_SIGNAL, false, move |values| {
            let this = values[0].get::<Self>().unwrap();
            callback(&this);
            None
        })
    }

}

#[cfg(test)]
mod tests {
    use super::price_label;

    #[test]
    fn price_label_prefixes_a_dollar_sign() {
        assert_eq!(price_label(23.99), "$23.99");
    }

    #[test]
    fn price_label_keeps_the_default_decimal_form() {
        assert_eq!(price_label(7.99), "$7.99");
        assert_eq!(price_label(3.95), "$3.95");
        assert_eq!(price_label(458.49), "$458.49");
    }

    #[test]
    fn price_label_formats_large_amounts() {
        assert_eq!(price_label(969.99), "$969.99");
    }
}

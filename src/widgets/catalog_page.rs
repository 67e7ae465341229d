use crate::prelude::*;
use super::catalog_row::CatalogRow;

use std::sync::OnceLock;
use glib::subclass::Signal;

const ADD_REQUESTED_SIGNAL: &str = "add-requested";

mod imp {
    use super::*;

    #[derive(Default, gtk::CompositeTemplate)]
    #[template(resource = "/io/github/storefront/catalog_page.ui")]
    pub struct CatalogPage {
        #[template_child(id = "catalog-page-header")]
        pub header_label: TemplateChild<gtk::Label>,
        #[template_child(id = "catalog-page-list-box")]
        pub list_box: TemplateChild<gtk::ListBox>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for CatalogPage {
        const NAME: &'static str = "CatalogPage";
        type Type = super::CatalogPage;
        type ParentType = adw::Bin;

        fn class_init(class: &mut Self::Class) {
            Self::bind_template(class);
        }

        fn instance_init(object: &glib::subclass::InitializingObject<Self>) {
            object.init_template();
        }
    }

    impl ObjectImpl for CatalogPage {
        fn constructed(&self) {
            self.parent_constructed();
        }

        fn signals() -> &'static [Signal] {
            static SIGNALS: OnceLock<[Signal; 1]> = OnceLock::new();
            SIGNALS.get_or_init(|| {
                [
                    Signal::builder(ADD_REQUESTED_SIGNAL)
                        .param_types([CatalogRow::static_type()])
                        .build()
                ]
            })
        }

        fn dispose(&self) {
            self.dispose_template();
        }
    }

    impl WidgetImpl for CatalogPage {}
    impl BinImpl for CatalogPage {}
}

glib::wrapper! {
    pub struct CatalogPage(ObjectSubclass<imp::CatalogPage>)
        @extends adw::Bin, gtk::Widget,
        @implements gtk::Accessible, gtk::Buildable, gtk::ConstraintTarget;
}

impl CatalogPage {

    pub fn set_header(&self, header: &str) {
        self.imp().header_label.set_label(header);
    }

    pub fn append_row(&self, row: CatalogRow) {
        self.setup_row_add_requests(&row);
        self.imp().list_box.append(&row);
    }

    fn setup_row_add_requests(&self, row: &CatalogRow) {
        let this_weak = self.downgrade();
        row.connect_add_requested(move |row| {
            if let Some(this) = this_weak.upgrade() {
                this.emit_by_name::<()>(ADD_REQUESTED_SIGNAL, &[row]);
            }
        });
    }

    pub fn connect_add_requested<F>(&self, callback: F) -> glib::SignalHandlerId
    where
        F: Fn(&Self, &CatalogRow) + 'static,
    {
        self.connect_local(ADD_REQUESTED_SIGNAL, false, move |values| {
            let this = values[0].get::<Self>().unwrap();
            let row = values[1].get::<&CatalogRow>().unwrap();
            callback(&this, row);
            None
        })
    }

}

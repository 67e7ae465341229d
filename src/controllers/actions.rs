use super::super::prelude::*;

pub struct Actions {
    application: adw::Application,
}

impl Actions {
    pub fn new(application: &adw::Application) -> Self {
        let this = Self { application: application.clone() };
        this.setup_quit_action();
        this
    }

    fn setup_quit_action(&self) {
        let quit_action = gtk::gio::SimpleAction::new("quit", None);
        self.connect_quit_handler(&quit_action);
        self.application.add_action(&quit_action);
        self.application.set_accels_for_action("app.quit", &["<Ctrl>q"]);
    }

    fn connect_quit_handler(&self, quit_action: &gtk::gio::SimpleAction) {
        let application_weak = self.application.downgrade();
        quit_action.connect_activate(move |_action, _| {
            if let Some(application) = application_weak.upgrade() {
                application.quit();
            }
        });
    }

}

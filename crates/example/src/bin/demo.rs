//! Builds immutable settings, copies them into a mutable instance and
//! prints both through the shared interface.

use zonecopy::MutableCopying;
use zonecopy_example::{Settings, SettingsProtocol, describe};

fn main() {
    let settings = Settings::new(42, "hello".to_string(), true);

    let mut copy = settings.copy();
    copy.count = 7;
    copy.enabled = false;

    let views: [(&str, &dyn SettingsProtocol); 2] = [("immutable", &settings), ("mutable", &copy)];
    for (name, view) in views {
        println!("{name}: {}", describe(view));
    }
}

use crate::domain::model::Person;
use crate::domain::ports::{Demo, Sink};
use crate::utils::error::Result;

/// Struct-update copy: two fields carried over, last name overridden.
pub fn with_last_name(person: &Person, last_name: &str) -> Person {
    Person {
        last_name: last_name.to_string(),
        ..person.clone()
    }
}

pub struct RenameDemo;

impl Demo for RenameDemo {
    fn name(&self) -> &'static str {
        "rename"
    }

    fn describe(&self) -> &'static str {
        "Copy a person, overriding only the last name"
    }

    fn run(&self, sink: &dyn Sink) -> Result<()> {
        let alice = Person::born("Alice", "Smith", 2000, 12, 12);
        let renamed = with_last_name(&alice, "Jones");

        sink.emit(&format!("{:?}", renamed))?;
        Ok(())
    }
}

use crate::domain::model::{NameTag, Person};
use crate::domain::ports::{Demo, Sink};
use crate::utils::error::Result;

pub fn sample_persons() -> Vec<Person> {
    vec![
        Person::born("Alice", "Smith", 2000, 12, 12),
        Person::born("Bob", "Green", 2001, 10, 10),
    ]
}

/// Keeps input order; no filtering.
pub fn project_names(persons: &[Person]) -> Vec<NameTag> {
    persons
        .iter()
        .map(|p| NameTag {
            name: p.first_name.clone(),
        })
        .collect()
}

pub struct ProjectionDemo;

impl Demo for ProjectionDemo {
    fn name(&self) -> &'static str {
        "projection"
    }

    fn describe(&self) -> &'static str {
        "Project person records down to first names"
    }

    fn run(&self, sink: &dyn Sink) -> Result<()> {
        let persons = sample_persons();
        let names = project_names(&persons);

        for tag in &names {
            sink.emit(&format!("{:?}", tag))?;
        }

        Ok(())
    }
}

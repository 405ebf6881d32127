use crate::domain::model::{MySecret, SecretEntry, SecretReply};
use crate::domain::ports::{Demo, Sink};
use crate::utils::error::Result;
use std::collections::HashMap;

/// Build a `Default` value, then let the closure fill it in. Stand-in for
/// builder-style construction over reply types.
pub fn build_with<T, F>(set: F) -> T
where
    T: Default,
    F: FnOnce(&mut T),
{
    let mut value = T::default();
    set(&mut value);
    value
}

pub fn lookup_assembled(store: &HashMap<i64, i64>, key: i64) -> SecretReply {
    match store.get(&key) {
        Some(&number) => build_with(|reply: &mut SecretReply| {
            reply.secret = Some(MySecret { number });
        }),
        None => SecretReply::default(),
    }
}

pub fn lookup_direct(store: &HashMap<i64, i64>, key: i64) -> SecretReply {
    SecretReply {
        secret: store.get(&key).map(|&number| MySecret { number }),
    }
}

pub fn describe_reply(key: i64, reply: &SecretReply) -> String {
    match reply.secret {
        Some(MySecret { number }) => format!("My secret number for key {} is {}", key, number),
        None => format!("No secret number found for key {}!", key),
    }
}

fn build_store(entries: Vec<SecretEntry>) -> HashMap<i64, i64> {
    entries.into_iter().map(|e| (e.key, e.number)).collect()
}

/// Lookup via the closure helper.
pub struct SecretsDemo {
    store: HashMap<i64, i64>,
    keys: Vec<i64>,
}

impl SecretsDemo {
    pub fn new(entries: Vec<SecretEntry>, keys: Vec<i64>) -> Self {
        Self {
            store: build_store(entries),
            keys,
        }
    }
}

impl Demo for SecretsDemo {
    fn name(&self) -> &'static str {
        "secrets"
    }

    fn describe(&self) -> &'static str {
        "Optional secret lookup, reply assembled through the closure helper"
    }

    fn run(&self, sink: &dyn Sink) -> Result<()> {
        for &key in &self.keys {
            let reply = lookup_assembled(&self.store, key);
            sink.emit(&describe_reply(key, &reply))?;
        }
        Ok(())
    }
}

/// Same observable behavior, reply constructed as a plain struct literal.
pub struct SecretsDirectDemo {
    store: HashMap<i64, i64>,
    keys: Vec<i64>,
}

impl SecretsDirectDemo {
    pub fn new(entries: Vec<SecretEntry>, keys: Vec<i64>) -> Self {
        Self {
            store: build_store(entries),
            keys,
        }
    }
}

impl Demo for SecretsDirectDemo {
    fn name(&self) -> &'static str {
        "secrets-direct"
    }

    fn describe(&self) -> &'static str {
        "Optional secret lookup, reply constructed directly"
    }

    fn run(&self, sink: &dyn Sink) -> Result<()> {
        for &key in &self.keys {
            let reply = lookup_direct(&self.store, key);
            sink.emit(&describe_reply(key, &reply))?;
        }
        Ok(())
    }
}

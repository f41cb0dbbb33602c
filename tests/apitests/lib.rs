#[cfg(test)]
mod core {
    mod config;
    mod contact_store;
}

#[cfg(test)]
mod data {
    mod sheet;
    mod resolver;
}


// helper functions
fn fixture_path(input: &str) -> String {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/apitests")
        .join(input);
    path.display().to_string()
}

fn contact(name: &str, phone: &str) -> phonebook::Contact {
    match phonebook::Contact::new(name, phone) {
        Ok(v) => v,
        Err(e) => panic!("Failed to create contact {}: {}", name, e),
    }
}

fn main() {}

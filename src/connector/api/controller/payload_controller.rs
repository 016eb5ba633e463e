use anyhow::Result;

use super::super::Container;

pub struct PayloadController<'a> {
    container: &'a Container,
}

impl<'a> PayloadController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub fn payload(&self, input: &str) -> Result<String> {
        let payload = self.container.client().build_payload(input);
        Ok(payload.to_json_pretty()?)
    }
}

pub mod factory;
pub mod mockito;

use crate::TestContext;

impl TestContext {
    pub fn esi<'a>(&'a mut self) -> EsiFixtures<'a> {
        EsiFixtures { context: self }
    }
}

pub struct EsiFixtures<'a> {
    context: &'a mut TestContext,
}

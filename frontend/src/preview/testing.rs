//! In-memory preview fake used by the core tests. Records every call it
//! receives and can be told to fail any single operation, which is enough to
//! exercise seek ordering, fan-out isolation, and snapshot contents without
//! a browser.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use common::model::element::{Element, ElementKind};

use super::handle::{PreviewError, PreviewHandle};

#[derive(Debug, Clone, PartialEq)]
pub enum MockCall {
    Elements,
    SetTime(f64),
    SetModifications(BTreeMap<String, String>),
    TemplateSource,
    LoadTemplate(String),
}

#[derive(Clone, Default)]
pub struct MockPreview {
    elements: Vec<Element>,
    calls: Rc<RefCell<Vec<MockCall>>>,
    fail_elements: bool,
    fail_set_time: bool,
    fail_set_modifications: bool,
}

impl MockPreview {
    pub fn with_element(mut self, name: &str, global_time: f64) -> Self {
        self.elements.push(Element {
            name: Some(name.to_string()),
            kind: ElementKind::Text,
            global_time,
            ..Default::default()
        });
        self
    }

    pub fn with_composed_element(mut self, name: &str, global_time: f64) -> Self {
        self.elements.push(Element {
            name: Some("Scene".to_string()),
            kind: ElementKind::Composition,
            children: vec![Element {
                name: Some(name.to_string()),
                kind: ElementKind::Image,
                global_time,
                ..Default::default()
            }],
            ..Default::default()
        });
        self
    }

    pub fn failing_elements(mut self) -> Self {
        self.fail_elements = true;
        self
    }

    pub fn failing_set_time(mut self) -> Self {
        self.fail_set_time = true;
        self
    }

    pub fn failing_set_modifications(mut self) -> Self {
        self.fail_set_modifications = true;
        self
    }

    pub fn calls(&self) -> Vec<MockCall> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: MockCall) {
        self.calls.borrow_mut().push(call);
    }
}

impl PreviewHandle for MockPreview {
    async fn elements(&self) -> Result<Vec<Element>, PreviewError> {
        self.record(MockCall::Elements);
        if self.fail_elements {
            return Err(PreviewError::Sdk("elements query rejected".into()));
        }
        Ok(self.elements.clone())
    }

    async fn set_time(&self, seconds: f64) -> Result<(), PreviewError> {
        self.record(MockCall::SetTime(seconds));
        if self.fail_set_time {
            return Err(PreviewError::Sdk("seek rejected".into()));
        }
        Ok(())
    }

    async fn set_modifications(
        &self,
        modifications: &BTreeMap<String, String>,
    ) -> Result<(), PreviewError> {
        self.record(MockCall::SetModifications(modifications.clone()));
        if self.fail_set_modifications {
            return Err(PreviewError::Sdk("modification push rejected".into()));
        }
        Ok(())
    }

    async fn template_source(&self) -> Result<serde_json::Value, PreviewError> {
        self.record(MockCall::TemplateSource);
        Ok(serde_json::json!({ "elements": [] }))
    }

    async fn load_template(&self, template_id: &str) -> Result<(), PreviewError> {
        self.record(MockCall::LoadTemplate(template_id.to_string()));
        Ok(())
    }
}

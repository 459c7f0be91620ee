//! Subject types shared by the integration tests.

#[derive(Debug, Clone, Default)]
pub struct Letter {
    pub person: Option<Person>,
    pub subject: Option<String>,
    pub body: Option<String>,
    pub attachments: Option<Vec<Attachment>>,
}

#[derive(Debug, Clone, Default)]
pub struct Person {
    pub first_name: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct Attachment {
    pub file_name: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Entity {
    pub nullable_int1: Option<i32>,
    pub int2: i32,
    pub long1: i64,
    pub list1: Option<Vec<String>>,
    pub list2: Option<Vec<i64>>,
}

impl Default for Entity {
    fn default() -> Self {
        Self {
            nullable_int1: None,
            int2: 0,
            long1: 0,
            list1: Some(Vec::new()),
            list2: None,
        }
    }
}

impl Letter {
    pub fn with_subject(subject: &str) -> Self {
        Self {
            subject: Some(subject.to_owned()),
            ..Self::default()
        }
    }
}

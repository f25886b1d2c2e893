use kvrecord::ModelType;

pub fn event() -> ModelType {
    ModelType::new("Event").attribute("name")
}

pub fn user() -> ModelType {
    ModelType::new("User").attribute("email")
}

pub fn post() -> ModelType {
    ModelType::new("Post")
        .attribute("body")
        .set("attendees")
        .list("comments")
}

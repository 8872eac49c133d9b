use crate::{CallerIdentity, Tutorial};

pub fn get_tutorial_fixture(title: Option<&str>) -> Tutorial {
    let title = title.unwrap_or("tutorial-fixture");

    Tutorial {
        id: 0,
        title: title.to_owned(),
        description: format!("{title} description"),
        published: false,
    }
}

pub fn get_caller_identity_fixture() -> CallerIdentity {
    CallerIdentity {
        account: Some("123456789012".to_owned()),
        arn: Some("arn:aws:iam::123456789012:user/tutorials".to_owned()),
        user_id: Some("AIDAEXAMPLEUSERID".to_owned()),
    }
}

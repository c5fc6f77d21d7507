/// Named actions the views link or post to. The host application owns the
/// actual routing; this only turns an action into a URL.
pub trait Routes {
    fn index(&self) -> String;
    fn create(&self) -> String;
    fn store(&self) -> String;
    fn show(&self, id: i64) -> String;
    fn edit(&self, id: i64) -> String;
    fn update(&self, id: i64) -> String;
    fn destroy(&self, id: i64) -> String;
}

/// Resource-style URLs under one base path.
#[derive(Debug, Clone)]
pub struct ResourceRoutes {
    base: String,
}

impl ResourceRoutes {
    pub fn new(base: &str) -> Self {
        let trimmed = base.trim().trim_end_matches('/');
        let base = if trimmed.is_empty() || trimmed.starts_with('/') || trimmed.contains("://") {
            trimmed.to_string()
        } else {
            format!("/{trimmed}")
        };
        Self { base }
    }

    fn member(&self, id: i64) -> String {
        format!("{}/{}", self.base, id)
    }
}

impl Routes for ResourceRoutes {
    fn index(&self) -> String {
        if self.base.is_empty() {
            "/".to_string()
        } else {
            self.base.clone()
        }
    }

    fn create(&self) -> String {
        format!("{}/create", self.base)
    }

    fn store(&self) -> String {
        self.index()
    }

    fn show(&self, id: i64) -> String {
        self.member(id)
    }

    fn edit(&self, id: i64) -> String {
        format!("{}/edit", self.member(id))
    }

    fn update(&self, id: i64) -> String {
        self.member(id)
    }

    fn destroy(&self, id: i64) -> String {
        self.member(id)
    }
}

//! Writer entity.

/// Unique identifier for a writer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WriterId(pub u64);

impl std::fmt::Display for WriterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A writer featured on the writers view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Writer {
    id: WriterId,
    name: &'static str,
    avatar_url: &'static str,
    followers: u32,
    bio: &'static str,
}

impl Writer {
    #[must_use]
    pub const fn new(id: u64, name: &'static str, bio: &'static str) -> Self {
        Self {
            id: WriterId(id),
            name,
            avatar_url: "",
            followers: 0,
            bio,
        }
    }

    /// Sets the avatar image reference.
    #[must_use]
    pub const fn with_avatar(mut self, avatar_url: &'static str) -> Self {
        self.avatar_url = avatar_url;
        self
    }

    /// Sets the follower count.
    #[must_use]
    pub const fn with_followers(mut self, followers: u32) -> Self {
        self.followers = followers;
        self
    }

    #[must_use]
    pub const fn id(&self) -> WriterId {
        self.id
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub const fn avatar_url(&self) -> &'static str {
        self.avatar_url
    }

    #[must_use]
    pub const fn followers(&self) -> u32 {
        self.followers
    }

    #[must_use]
    pub const fn bio(&self) -> &'static str {
        self.bio
    }
}

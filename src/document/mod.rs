pub(crate) mod frontmatter;
pub(crate) mod highlight;
pub(crate) mod markdown;
pub(crate) mod snippet;

/// Author for scaffolded posts: the explicit name, else the OS user's real name, else the login.
pub fn author_name(explicit: Option<&str>) -> String {
    if let Some(name) = explicit.filter(|n| !n.trim().is_empty()) {
        return name.trim().to_string();
    }

    let name = whoami::realname();
    if name.is_empty() {
        return whoami::username();
    }
    name
}

//! The `manuscore login`, `logout`, and `whoami` commands.

use anyhow::Result;

use manuscore_store::session;

use super::Context;

pub fn login(ctx: &Context, name: &str) -> Result<()> {
    anyhow::ensure!(!name.trim().is_empty(), "user name must be non-empty");
    let mut storage = ctx.open_storage()?;
    session::login(&mut storage, name)?;
    println!("Logged in as {}.", name.trim());
    Ok(())
}

pub fn logout(ctx: &Context) -> Result<()> {
    let mut storage = ctx.open_storage()?;
    session::logout(&mut storage)?;
    println!("Logged out.");
    Ok(())
}

pub fn whoami(ctx: &Context) -> Result<()> {
    let storage = ctx.open_storage()?;
    match session::current_user(&storage)? {
        Some(user) => println!("{user}"),
        None => println!("Not logged in."),
    }
    Ok(())
}

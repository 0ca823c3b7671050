use crate::areas::repository::Repository;
use std::io::Write;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteAction {
    List { verbose: bool },
    Add { name: String, url: String },
    Remove { name: String },
    GetUrl { name: String },
}

impl Repository {
    pub fn remote(&self, action: &RemoteAction) -> anyhow::Result<()> {
        match action {
            RemoteAction::List { verbose } => {
                let remotes = self.config().list_remotes()?;
                let mut writer = self.writer();

                for (name, url) in &remotes {
                    if *verbose {
                        writeln!(writer, "{name}\t{url} (fetch)")?;
                        writeln!(writer, "{name}\t{url} (push)")?;
                    } else {
                        writeln!(writer, "{name}")?;
                    }
                }
            }
            RemoteAction::Add { name, url } => self.config().add_remote(name, url)?,
            RemoteAction::Remove { name } => self.config().remove_remote(name)?,
            RemoteAction::GetUrl { name } => {
                let url = self.config().get_remote_url(name)?;
                writeln!(self.writer(), "{url}")?;
            }
        }

        Ok(())
    }
}

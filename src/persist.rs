use std::io::{Read, Write};
use std::path::Path;

pub trait PersistFormat {
    fn serialize<T>(data: &T, out: &mut dyn Write) -> anyhow::Result<()>
    where
        T: ::serde::Serialize;

    fn deserialize<T>(input: &mut dyn Read) -> anyhow::Result<T>
    where
        T: for<'de> ::serde::Deserialize<'de>;
}

pub struct Json;

impl PersistFormat for Json {
    fn serialize<T>(data: &T, out: &mut dyn Write) -> anyhow::Result<()>
    where
        T: serde::Serialize,
    {
        let data = serde_json::to_vec_pretty(data)?;
        Ok(out.write_all(&data)?)
    }

    fn deserialize<T>(input: &mut dyn Read) -> anyhow::Result<T>
    where
        T: for<'de> serde::Deserialize<'de>,
    {
        let mut out = String::new();
        input.read_to_string(&mut out)?;
        Ok(serde_json::from_str(&out)?)
    }
}

pub trait Persist
where
    for<'de> Self: ::serde::Serialize + ::serde::Deserialize<'de>,
{
    fn save<K: PersistFormat>(&self, out: &mut dyn Write) -> anyhow::Result<()> {
        K::serialize(self, out)
    }

    fn load<K: PersistFormat>(input: &mut dyn Read) -> anyhow::Result<Self>
    where
        Self: Sized,
    {
        K::deserialize(input)
    }
}

impl<T: for<'de> ::serde::Deserialize<'de> + ::serde::Serialize> Persist for T {}

pub trait PersistExt: Persist {
    fn save_to_file<K: PersistFormat>(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let mut file = std::fs::File::create(path)?;
        self.save::<K>(&mut file)
    }

    fn load_from_file<K: PersistFormat>(path: impl AsRef<Path>) -> anyhow::Result<Self>
    where
        Self: Sized,
    {
        let mut file = std::fs::File::open(path)?;
        Self::load::<K>(&mut file)
    }
}

impl<T> PersistExt for T where T: Persist {}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(serde::Serialize, serde::Deserialize, Debug, PartialEq, Eq)]
    struct Record {
        name: String,
        score: u64,
    }

    #[test]
    fn load_reads_json() {
        let mut input = &br#"{"name": "alice", "score": 3}"#[..];
        let record = Record::load::<Json>(&mut input).unwrap();
        assert_eq!(
            record,
            Record {
                name: String::from("alice"),
                score: 3
            }
        );
    }

    #[test]
    fn save_writes_json() {
        let record = Record {
            name: String::from("alice"),
            score: 3,
        };
        let mut out = Vec::new();
        record.save::<Json>(&mut out).unwrap();
        let back: Record = serde_json::from_slice(&out).unwrap();
        assert_eq!(back, record);
    }
}

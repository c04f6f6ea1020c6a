use crate::Zone;
use std::fmt;

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Zone: {}", self.origin)?;
        if self.default_ttl != 0 {
            writeln!(f, "Default TTL: {}", self.default_ttl)?;
        }
        writeln!(f, "Records: {}", self.records.len())?;
        writeln!(f)?;

        for (i, record) in self.records.iter().enumerate() {
            writeln!(f, "Record {}:", i + 1)?;
            writeln!(f, "  Name: {}", record.name)?;
            writeln!(f, "  TTL: {}", record.ttl)?;
            writeln!(f, "  Class: {}", record.class)?;
            writeln!(f, "  Type: {}", record.rtype)?;
            writeln!(f, "  RData: {}", record.rdata)?;
            writeln!(f)?;
        }

        Ok(())
    }
}

pub fn to_toml(zone: &Zone) -> Result<String, toml::ser::Error> {
    toml::to_string(zone)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ParseOptions, Record};

    fn zone() -> Zone {
        Zone {
            origin: "example.com.".into(),
            default_ttl: 3600,
            records: vec![Record {
                name: "www.example.com.".into(),
                ttl: 3600,
                class: "IN".into(),
                rtype: "A".into(),
                rdata: "192.0.2.1".into(),
                origin: "example.com.".into(),
            }],
        }
    }

    #[test]
    fn text_block_per_record() {
        let expected = "Zone: example.com.\n\
                        Default TTL: 3600\n\
                        Records: 1\n\
                        \n\
                        Record 1:\n\
                        \x20 Name: www.example.com.\n\
                        \x20 TTL: 3600\n\
                        \x20 Class: IN\n\
                        \x20 Type: A\n\
                        \x20 RData: 192.0.2.1\n\
                        \n";

        assert_eq!(zone().to_string(), expected);
    }

    #[test]
    fn zero_default_ttl_is_omitted() {
        let zone = Zone::parse_str("", &ParseOptions::default()).unwrap();
        assert_eq!(zone.to_string(), "Zone: \nRecords: 0\n\n");
    }

    #[test]
    fn toml_output() {
        let out = to_toml(&zone()).unwrap();

        assert!(out.contains("[[records]]"));
        assert!(out.contains("type = \"A\""));
        assert_eq!(toml::from_str::<Zone>(&out).unwrap(), zone());
    }
}

use super::{PbClient, Result};
use crate::pb::{de::XmlStream, model::PasteInfo};
use log::*;

impl PbClient {
    /// List the currently trending pastes
    pub fn trending(&self) -> Result<Vec<PasteInfo>> {
        let body = self.post("trends", Vec::new())?;
        let pastes = XmlStream::<_, PasteInfo>::new(body)
            .collect::<std::result::Result<Vec<_>, _>>()?;
        debug!("{} trending pastes", pastes.len());
        Ok(pastes)
    }
}

#[cfg(test)]
mod tests {
    use crate::pb_protocol::testing::*;
    use httpmock::prelude::*;

    #[test]
    fn test_trending() {
        init();
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/api/api_post.php")
                .form_urlencoded_tuple("api_dev_key", DEV_KEY)
                .form_urlencoded_tuple("api_option", "trends");
            then.status(200).body(
                "<paste><paste_key>one</paste_key><paste_hits>900</paste_hits></paste>\
                 <paste><paste_key>two</paste_key><paste_hits>800</paste_hits></paste>",
            );
        });

        let pastes = client_for(&server).trending().unwrap();
        let hits: Vec<_> = pastes.iter().map(|p| (p.key.as_str(), p.hits)).collect();
        assert_eq!(hits, vec![("one", 900), ("two", 800)]);
        mock.assert();
    }
}

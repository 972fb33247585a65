use async_trait::async_trait;
use serde::Serialize;
use serde_json::{json, Value};
use std::sync::Mutex;
use urchintai_client::client::types::{
    DEFAULT_PROPERTY_ROOMS_ENDPOINT, DEFAULT_ROOM_DETAILS_ENDPOINT,
};
use urchintai_client::client::HttpResponse;
use urchintai_client::{
    Endpoints, PropertyCode, RequestSender, Result, RoomCode, Transport, UrClient, UrError,
};

const PROPERTY_URL: &str = "https://www.ur-net.go.jp/chintai/kanto/kanagawa/40_4120.html";
const ROOM_URL: &str =
    "https://www.ur-net.go.jp/chintai/kanto/kanagawa/40_2460_room.html?JKSS=000020654";

#[derive(Debug, Clone, PartialEq)]
struct Recorded {
    method: &'static str,
    url: String,
    form: Option<Value>,
}

/// Answers every request with the same response and remembers what was sent
struct RecordingTransport {
    response: HttpResponse,
    requests: Mutex<Vec<Recorded>>,
}

impl RecordingTransport {
    fn answering(status: u16, body: &str) -> Self {
        Self {
            response: HttpResponse::new(status, body),
            requests: Mutex::new(Vec::new()),
        }
    }

    fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn post<F>(&self, url: &str, form: &F) -> Result<HttpResponse>
    where
        F: Serialize + Send + Sync + ?Sized,
    {
        self.requests.lock().unwrap().push(Recorded {
            method: "POST",
            url: url.to_string(),
            form: Some(serde_json::to_value(form).unwrap()),
        });
        Ok(self.response.clone())
    }

    async fn get(&self, url: &str) -> Result<HttpResponse> {
        self.requests.lock().unwrap().push(Recorded {
            method: "GET",
            url: url.to_string(),
            form: None,
        });
        Ok(self.response.clone())
    }
}

fn property_code() -> PropertyCode {
    PropertyCode::new("40", "412", "0").unwrap()
}

fn room_code() -> RoomCode {
    RoomCode::new("40", "246", "0", "000020654").unwrap()
}

#[tokio::test]
async fn property_vacancy_requires_url_or_code() {
    let transport = RecordingTransport::answering(200, "not null");
    let client = UrClient::new(RequestSender::new(&transport));

    for url in [None, Some("")] {
        let err = client.is_property_vacant(url, None).await.unwrap_err();
        assert!(matches!(err, UrError::InvalidArgument(_)));
        assert_eq!(
            err.to_string(),
            "Please provide either property's URL or property code"
        );
    }
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn property_is_vacant_unless_api_answers_null() {
    let cases = [("not null", true), ("[]", true), ("null", false)];

    for (body, expected) in cases {
        let transport = RecordingTransport::answering(200, body);
        let client = UrClient::new(RequestSender::new(&transport));

        let by_url = client.is_property_vacant(Some(PROPERTY_URL), None).await;
        let code = property_code();
        let by_code = client.is_property_vacant(None, Some(&code)).await;

        assert_eq!(by_url.unwrap(), expected, "url, body {body:?}");
        assert_eq!(by_code.unwrap(), expected, "code, body {body:?}");
    }
}

#[tokio::test]
async fn null_check_is_exact() {
    for body in ["NULL", " null", "null\n"] {
        let transport = RecordingTransport::answering(200, body);
        let client = UrClient::new(RequestSender::new(&transport));

        assert!(client.is_property_vacant(Some(PROPERTY_URL), None).await.unwrap());
    }
}

#[tokio::test]
async fn property_query_is_posted_to_property_rooms_endpoint() {
    let transport = RecordingTransport::answering(200, "null");
    let client = UrClient::new(RequestSender::new(&transport));

    client.is_property_vacant(Some(PROPERTY_URL), None).await.unwrap();

    assert_eq!(
        transport.requests(),
        vec![Recorded {
            method: "POST",
            url: DEFAULT_PROPERTY_ROOMS_ENDPOINT.to_string(),
            form: Some(json!({
                "shisya": "40",
                "danchi": "412",
                "shikibetu": "0",
                "orderByField": "0",
                "orderBySort": "0",
                "pageIndex": "0",
            })),
        }]
    );
}

#[tokio::test]
async fn property_code_takes_priority_over_url() {
    let transport = RecordingTransport::answering(200, "null");
    let client = UrClient::new(RequestSender::new(&transport));
    let code = PropertyCode::new("04", "123", "1").unwrap();

    // An unparseable URL proves it is never looked at
    let vacant = client
        .is_property_vacant(Some("not a UR Chintai URL"), Some(&code))
        .await
        .unwrap();

    assert!(!vacant);
    let form = transport.requests()[0].form.clone().unwrap();
    assert_eq!(form["shisya"], "04");
    assert_eq!(form["danchi"], "123");
    assert_eq!(form["shikibetu"], "1");
}

#[tokio::test]
async fn invalid_property_url_is_not_sent() {
    let transport = RecordingTransport::answering(200, "not null");
    let client = UrClient::new(RequestSender::new(&transport));
    let url = "https://www.ur-net.go.jp/chintai/kanto/kanagawa/40_412.html";

    let err = client.is_property_vacant(Some(url), None).await.unwrap_err();

    assert_eq!(err.to_string(), format!("UR Chintai URL is invalid: {url}"));
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn property_check_surfaces_server_errors() {
    let transport = RecordingTransport::answering(500, "Server error");
    let client = UrClient::new(RequestSender::new(&transport));

    let err = client
        .is_property_vacant(Some(PROPERTY_URL), None)
        .await
        .unwrap_err();

    assert!(matches!(err, UrError::Connection { .. }));
    assert_eq!(
        err.to_string(),
        format!("An error occurred while sending request to {DEFAULT_PROPERTY_ROOMS_ENDPOINT}: Server error")
    );
}

#[tokio::test]
async fn room_vacancy_requires_url_or_code() {
    let transport = RecordingTransport::answering(200, "not null");
    let client = UrClient::new(RequestSender::new(&transport));

    for url in [None, Some("")] {
        let err = client.is_room_vacant(url, None).await.unwrap_err();
        assert!(matches!(err, UrError::InvalidArgument(_)));
        assert_eq!(err.to_string(), "Please provide either room's URL or room code");
    }
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn room_is_vacant_unless_api_answers_null() {
    for (body, expected) in [("not null", true), ("null", false)] {
        let transport = RecordingTransport::answering(200, body);
        let client = UrClient::new(RequestSender::new(&transport));

        let by_url = client.is_room_vacant(Some(ROOM_URL), None).await.unwrap();
        let code = room_code();
        let by_code = client.is_room_vacant(None, Some(&code)).await.unwrap();

        assert_eq!(by_url, expected);
        assert_eq!(by_code, expected);
    }
}

#[tokio::test]
async fn room_query_is_posted_to_room_details_endpoint() {
    let transport = RecordingTransport::answering(200, "not null");
    let client = UrClient::new(RequestSender::new(&transport));

    client.is_room_vacant(Some(ROOM_URL), None).await.unwrap();

    assert_eq!(
        transport.requests(),
        vec![Recorded {
            method: "POST",
            url: DEFAULT_ROOM_DETAILS_ENDPOINT.to_string(),
            form: Some(json!({
                "shisya": "40",
                "danchi": "246",
                "shikibetu": "0",
                "id": "000020654",
            })),
        }]
    );
}

#[tokio::test]
async fn room_code_takes_priority_over_url() {
    let transport = RecordingTransport::answering(200, "null");
    let client = UrClient::new(RequestSender::new(&transport));
    let code = room_code();

    client
        .is_room_vacant(Some("https://example.com/40_2460_room.html?JKSS=1"), Some(&code))
        .await
        .unwrap();

    let form = transport.requests()[0].form.clone().unwrap();
    assert_eq!(form["id"], "000020654");
}

#[tokio::test]
async fn custom_endpoints_are_used() {
    let transport = RecordingTransport::answering(200, "null");
    let endpoints = Endpoints {
        property_rooms: "http://localhost/rooms".to_string(),
        room_details: "http://localhost/room".to_string(),
    };
    let client = UrClient::with_endpoints(RequestSender::new(&transport), endpoints);

    client.is_property_vacant(None, Some(&property_code())).await.unwrap();
    client.is_room_vacant(None, Some(&room_code())).await.unwrap();

    let urls: Vec<_> = transport.requests().into_iter().map(|r| r.url).collect();
    assert_eq!(urls, ["http://localhost/rooms", "http://localhost/room"]);
}

#[tokio::test]
async fn property_name_requires_url() {
    let transport = RecordingTransport::answering(200, "");
    let client = UrClient::new(RequestSender::new(&transport));

    for url in [None, Some("")] {
        let err = client.get_property_name(url).await.unwrap_err();
        assert_eq!(err.to_string(), "Room's URL cannot be empty");
    }
}

#[tokio::test]
async fn property_name_is_read_from_listing_page() {
    let page = r#"<html><body>
        <h1 class="article_headings">
            <span class="item_title">
                Khu Tap The Bo Cong An
            </span>
            <span class="item_sub">(神奈川県川崎市川崎区)</span>
        </h1>
    </body></html>"#;
    let transport = RecordingTransport::answering(200, page);
    let client = UrClient::new(RequestSender::new(&transport));

    let name = client.get_property_name(Some(PROPERTY_URL)).await.unwrap();

    assert_eq!(name, "Khu Tap The Bo Cong An");
    let requests = transport.requests();
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].url, PROPERTY_URL);
}

#[tokio::test]
async fn property_name_parse_failure_propagates() {
    let transport = RecordingTransport::answering(200, "<body><h1>This is a header</h1></body>");
    let client = UrClient::new(RequestSender::new(&transport));

    let err = client.get_property_name(Some(PROPERTY_URL)).await.unwrap_err();

    assert!(matches!(err, UrError::ParseError));
}

#[tokio::test]
async fn property_name_page_errors_propagate() {
    let transport = RecordingTransport::answering(404, "Not Found");
    let client = UrClient::new(RequestSender::new(&transport));

    let err = client.get_property_name(Some(PROPERTY_URL)).await.unwrap_err();

    assert_eq!(
        err.to_string(),
        format!("An error occurred while sending request to {PROPERTY_URL}: Not Found")
    );
}

#[tokio::test]
async fn concurrent_checks_share_one_transport() {
    let transport = RecordingTransport::answering(200, "not null");
    let client = UrClient::new(RequestSender::new(&transport));
    let room = room_code();

    let (property, room) = tokio::join!(
        client.is_property_vacant(Some(PROPERTY_URL), None),
        client.is_room_vacant(None, Some(&room)),
    );

    assert!(property.unwrap());
    assert!(room.unwrap());
    assert_eq!(transport.requests().len(), 2);
}

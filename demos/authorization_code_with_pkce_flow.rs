use dotenvy::dotenv;
use spotibind::{
    authorize::{AuthorizationRequest, PkceVerifier},
    client::{SpotifyClient, TimeRange},
    scope::Scope,
    token::PkceRefreshableAuthToken,
};

const REDIRECT_URI: &str = "http://localhost/callback";

#[tokio::main]
async fn main() {
    dotenv().ok();
    env_logger::init();

    // PKCE doesn't need the client secret
    let client_id = std::env::var("CLIENT_ID").expect("Spotify client ID not in environment");

    let client = SpotifyClient::new();
    let verifier = PkceVerifier::generate();
    let request = AuthorizationRequest::new(&client_id, REDIRECT_URI)
        .scopes([Scope::UserTopRead])
        .pkce(&verifier);

    println!("Authorize URL: {}", request.code_url(&client));

    let mut code = String::new();
    let mut state = String::new();

    println!("Code:");
    std::io::stdin().read_line(&mut code).unwrap();

    println!("State:");
    std::io::stdin().read_line(&mut state).unwrap();

    request.verify_state(state.trim()).expect("state mismatch");

    let mut token =
        PkceRefreshableAuthToken::new(&client, code.trim(), REDIRECT_URI, &client_id, verifier.as_str())
            .await
            .expect("failed to exchange authorization code");

    let top_tracks = client
        .top_tracks(&token, Some(10), 0, TimeRange::ShortTerm)
        .await
        .unwrap();

    for track in top_tracks.items {
        println!("{} ({})", track.track.name, track.album.name);
    }

    // every refresh rotates the refresh token
    token.refresh(&client, &client_id).await.expect("failed to refresh access token");
    println!("New refresh token: {}", token.refresh_token());
}

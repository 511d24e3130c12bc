use dotenvy::dotenv;
use spotibind::{
    authorize::AuthorizationRequest,
    client::{SpotifyClient, TimeRange},
    scope::Scope,
    token::ScopedAuthToken,
};

#[tokio::main]
async fn main() {
    dotenv().ok();
    env_logger::init();

    let client_id = std::env::var("CLIENT_ID").expect("Spotify client ID not in environment");
    let scopes = [Scope::UserTopRead];

    let client = SpotifyClient::new();
    let request = AuthorizationRequest::new(client_id, "http://localhost/callback").scopes(scopes);

    println!("Authorize URL: {}", request.token_url(&client));

    // the access token, its lifetime and the state are in the fragment of the URL the user is redirected to
    let mut access_token = String::new();
    let mut expires_in = String::new();
    let mut state = String::new();

    println!("Access token:");
    std::io::stdin().read_line(&mut access_token).unwrap();

    println!("Expires in:");
    std::io::stdin().read_line(&mut expires_in).unwrap();

    println!("State:");
    std::io::stdin().read_line(&mut state).unwrap();

    request.verify_state(state.trim()).expect("state mismatch");

    let token = ScopedAuthToken::new(
        access_token.trim(),
        expires_in.trim().parse().expect("expires_in is not a number"),
        scopes.map(|scope| scope.to_string()),
    );

    let top_artists = client
        .top_artists(&token, None, 0, TimeRange::LongTerm)
        .await
        .unwrap();

    for artist in top_artists.items {
        println!("{} ({})", artist.artist.name, artist.popularity);
    }
}

//! Fixed Java templates.
//!
//! Three templates, one per construct. Each is expanded with the bindings the
//! [`crate::walker`] builds for it; see the marker names below.
//!
//! | Template | Scalars | Sequences |
//! |----------|---------|-----------|
//! | [`FILE`] | `sourceFile`, `package`, `moduleName` | `protoImports`, `methods`, `messages` |
//! | [`METHOD`] | `methodName`, `serviceName`, `inputKind`, `outputKind` | `input*` / `output*` field sequences |
//! | [`MESSAGE`] | `transformerName`, `messageName`, `nestedMessages` | field sequences |
//!
//! Method and message expansions start with a newline so that consecutive
//! blocks are separated by one blank line once the file template joins them.

/// One Java source file per schema file
pub const FILE: &str = r#"// Generated by protoc-gen-rngrpc from $sourceFile$. Do not edit.
package $package$;

import com.facebook.react.bridge.Arguments;
import com.facebook.react.bridge.Promise;
import com.facebook.react.bridge.ReactApplicationContext;
import com.facebook.react.bridge.ReactContextBaseJavaModule;
import com.facebook.react.bridge.ReactMethod;
import com.facebook.react.bridge.ReadableMap;
import com.facebook.react.bridge.WritableMap;

import io.grpc.ManagedChannel;
import io.grpc.ManagedChannelBuilder;

import $*protoImports*$;

public class $moduleName$ extends ReactContextBaseJavaModule {
    String host;
    Integer port;

    public $moduleName$(ReactApplicationContext context) {
        super(context);
    }

    private void checkHostAndPort() throws Exception {
        if (this.host == null) {
            throw new Exception("\"host\" is not defined");
        }
        if (this.port == null) {
            throw new Exception("\"port\" is not defined");
        }
    }

    @Override
    public String getName() {
        return "$moduleName$";
    }

    @ReactMethod
    public void setHost(String host) {
        this.host = host;
    }

    @ReactMethod
    public void setPort(Integer port) {
        this.port = port;
    }
$*methods*$
$*messages*$
}
"#;

/// One `@ReactMethod` per unary RPC
pub const METHOD: &str = r#"
    @ReactMethod
    public void $methodName$(ReadableMap message, Promise promise) {
        ManagedChannel channel = null;
        try {
            checkHostAndPort();
            channel = ManagedChannelBuilder.forAddress(host, port).usePlaintext().build();
            $serviceName$Grpc.$serviceName$BlockingStub stub = $serviceName$Grpc.newBlockingStub(channel);
            $inputKind$ request = $inputKind$.newBuilder()
                .set$*inputFieldNamesUpper*$($*inputSetPrefixes*$message.get$*inputFieldTypes*$("$*inputFieldNamesLower*$")$*inputSetSuffixes*$)
                .build();

            $outputKind$ response = stub.$methodName$(request);
            WritableMap result = Arguments.createMap();
            result.put$*outputFieldTypes*$("$*outputFieldNamesLower*$", $*outputGetPrefixes*$response.get$*outputFieldNamesUpper*$()$*outputGetSuffixes*$);
            promise.resolve(result);
        } catch (Exception e) {
            promise.reject("Error", "Unable to call remote procedure \"$methodName$\"", e);
        } finally {
            if (channel != null) {
                channel.shutdown();
            }
        }
    }"#;

/// One transformer class per message, nested messages following their parent
pub const MESSAGE: &str = r#"
    public static final class $transformerName$ {
        public static $messageName$ fromReadableMap(ReadableMap map) {
            return $messageName$.newBuilder()
                .set$*fieldNamesUpper*$($*setPrefixes*$map.get$*fieldTypes*$("$*fieldNamesLower*$")$*setSuffixes*$)
                .build();
        }

        public static WritableMap toWritableMap($messageName$ message) {
            WritableMap map = Arguments.createMap();
            map.put$*fieldTypes*$("$*fieldNamesLower*$", $*getPrefixes*$message.get$*fieldNamesUpper*$()$*getSuffixes*$);
            return map;
        }
    }$nestedMessages$"#;
